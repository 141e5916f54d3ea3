//! Thin HTTP delivery shell.
//!
//! Serves one embedded page and one POST endpoint; all reconnaissance
//! logic lives in `domain-recon-core`. Routing and serialization only.

use actix_web::{get, post, web, App, HttpResponse, HttpServer, Responder};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use domain_recon_core::{ReconError, ReconService};

const INDEX_HTML: &str = include_str!("../static/index.html");

#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    domain: String,
}

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

#[post("/analyze")]
async fn analyze(request: web::Json<AnalyzeRequest>) -> HttpResponse {
    match ReconService::analyze(&request.domain).await {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e @ ReconError::Validation(_)) => {
            HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
        // Source-level errors are embedded in the report by the aggregator;
        // anything surfacing here is unexpected.
        Err(e) => {
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let bind = std::env::var("RECON_BIND").unwrap_or_else(|_| "127.0.0.1:5000".to_string());
    info!("domain-recon listening on {bind}");

    HttpServer::new(|| App::new().service(index).service(analyze))
        .bind(bind)?
        .run()
        .await
}
