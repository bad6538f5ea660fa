use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};

use log::info;
use serde::{Deserialize, Serialize};

use markov_gen_core::error::GenerateError;
use markov_gen_core::model::chain::ChainModel;
use markov_gen_core::model::generator::Generator;
use markov_gen_core::model::picker::{Picker, RandomPicker, SeededPicker};

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	count: Option<usize>,
	seed: Option<u64>,
}

/// Model summary returned by the `/v1/stats` endpoint
#[derive(Serialize)]
struct ModelStats {
	contexts: usize,
	transitions: usize,
}

struct SharedData {
	model: Option<ChainModel>,
}

/// HTTP PUT endpoint `/v1/learn`
///
/// Builds a chain model from the request body and installs it as the
/// server's current model, replacing any previous one.
///
/// Returns 400 if the body has fewer than two tokens (nothing to learn).
#[put("/v1/learn")]
async fn put_learn(data: web::Data<Mutex<SharedData>>, body: String) -> impl Responder {
	let model = ChainModel::from_text(&body);
	if model.is_empty() {
		return HttpResponse::BadRequest()
			.body("Need at least two whitespace-separated tokens to learn from");
	}

	let stats = ModelStats {
		contexts: model.len(),
		transitions: model.transition_count(),
	};

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	shared_data.model = Some(model);

	info!("learned model: {} contexts, {} transitions", stats.contexts, stats.transitions);
	HttpResponse::Ok().json(stats)
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates one or more texts by randomly walking the current model.
/// Each generated text is one line of the response body.
///
/// Query parameters:
/// - `count`: number of texts to generate (default 1)
/// - `seed`: seed for a reproducible walk; omitted means real entropy
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let count = query.count.unwrap_or(1).max(1);

	let picker: Box<dyn Picker> = match query.seed {
		Some(seed) => Box::new(SeededPicker::new(seed)),
		None => Box::new(RandomPicker::new()),
	};

	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	let model = match &shared_data.model {
		Some(model) => model,
		None => return HttpResponse::Conflict().body("No model learned yet, PUT /v1/learn first"),
	};

	let mut generator = Generator::with_picker(picker);
	let mut lines = Vec::with_capacity(count);
	for _ in 0..count {
		match generator.generate_text(model) {
			Ok(text) => lines.push(text),
			Err(e @ GenerateError::InsufficientInput) => {
				return HttpResponse::Conflict().body(e.to_string())
			}
			Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
		}
	}

	HttpResponse::Ok().body(lines.join("\n"))
}

/// HTTP GET endpoint `/v1/stats`
///
/// Returns context and transition counts for the current model.
#[get("/v1/stats")]
async fn get_stats(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	match &shared_data.model {
		Some(model) => HttpResponse::Ok().json(ModelStats {
			contexts: model.len(),
			transitions: model.transition_count(),
		}),
		None => HttpResponse::Conflict().body("No model learned yet, PUT /v1/learn first"),
	}
}

/// Main entry point for the server.
///
/// Starts with no model; clients learn one over HTTP before generating.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let shared_data = SharedData { model: None };
	let shared_model = web::Data::new(Mutex::new(shared_data));

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_model.clone())
			.service(put_learn)
			.service(get_generated)
			.service(get_stats)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
