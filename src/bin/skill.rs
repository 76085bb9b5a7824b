use anyhow::Result;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use dotenvy::dotenv;
use log::{error, info};
use serde_json::{json, Value};
use std::sync::Arc;

use remindme::core::Config;
use remindme::reminders::HttpServiceClientFactory;
use remindme::skill::{build_skill, InvokeError, Skill};
use remindme::ResponseEnvelope;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting RemindME skill endpoint...");

    let services = Arc::new(HttpServiceClientFactory::new(config.reminder.timeout));
    let skill = Arc::new(build_skill(&config, services)?);
    info!(
        "Registered handlers: {}",
        skill.chain().handler_names().collect::<Vec<_>>().join(", ")
    );
    if config.skill_id.is_none() {
        info!("SKILL_ID not set - accepting requests for any application id");
    }

    let app = Router::new()
        .route("/", post(invoke))
        .route("/healthz", get(healthz))
        .with_state(skill);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .map_err(|e| {
            error!("Failed to bind {}: {e}", config.bind_addr);
            anyhow::anyhow!("Listener bind failed: {}", e)
        })?;
    info!("Listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn healthz() -> &'static str {
    "ok"
}

async fn invoke(
    State(skill): State<Arc<Skill>>,
    body: Bytes,
) -> Result<Json<ResponseEnvelope>, (StatusCode, Json<Value>)> {
    skill.invoke_json(&body).await.map(Json).map_err(|e| {
        error!("Rejected invocation: {e}");
        let kind = match &e {
            InvokeError::MalformedEnvelope(_) => "MALFORMED_ENVELOPE",
            InvokeError::SkillIdMismatch { .. } => "SKILL_ID_MISMATCH",
        };
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": kind, "message": e.to_string()})),
        )
    })
}
