use std::process::exit;

use anyhow::{Context as _, Result};
use log::info;

use markov_gen_core::model::chain::ChainModel;
use markov_gen_core::model::generator::Generator;
use markov_gen_core::model::picker::{Picker, RandomPicker, SeededPicker};

const USAGE: &str = "Usage: markov-gen-cli <FILE_PATH> [COUNT] [SEED]";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!("{USAGE}");
        exit(1);
    }

    let count: usize = match args.get(2) {
        Some(raw) => raw.parse().context("COUNT must be a positive integer")?,
        None => 1,
    };

    // A seed argument switches to a reproducible walk
    let picker: Box<dyn Picker> = match args.get(3) {
        Some(raw) => {
            let seed: u64 = raw.parse().context("SEED must be an unsigned integer")?;
            Box::new(SeededPicker::new(seed))
        }
        None => Box::new(RandomPicker::new()),
    };

    let text = std::fs::read_to_string(&args[1])
        .with_context(|| format!("could not read {}", args[1]))?;

    let model = ChainModel::from_text(&text);
    info!("model ready: {} contexts, {} transitions", model.len(), model.transition_count());

    let mut generator = Generator::with_picker(picker);
    for _ in 0..count {
        println!("{}", generator.generate_text(&model)?);
    }

    Ok(())
}
