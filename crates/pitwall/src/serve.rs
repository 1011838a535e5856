use crate::prelude::{eprintln, *};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::standings::{build_client, PitwallConfig};

/// Pass-through proxy app
#[derive(Debug, clap::Parser)]
#[command(name = "serve")]
#[command(about = "Pass-through proxy for the upstream standings API")]
pub struct App {
    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind to
    #[arg(short, long, default_value = "5017")]
    pub port: u16,
}

struct ProxyState {
    client: reqwest::Client,
    config: PitwallConfig,
    verbose: bool,
}

/// Run the standings proxy
///
/// Exposes `GET /api/drivers/{season}` and forwards it to the upstream
/// Pitwall API with the `x-api-key` header attached, relaying status and
/// body verbatim. No filtering or sorting happens here; that is the view
/// engine's job on the consuming side.
pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let config = PitwallConfig::from_env()?;
    let client = build_client(&config)?;

    let addr = format!("{}:{}", app.host, app.port);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = Arc::new(ProxyState {
        client,
        config,
        verbose: global.verbose,
    });

    let app_router = Router::new()
        .route("/api/drivers/{season}", get(drivers_handler))
        .layer(cors)
        .with_state(state);

    if global.verbose {
        eprintln!("Standings proxy listening on http://{}", addr);
        eprintln!("Drivers endpoint: http://{}/api/drivers/{{season}}", addr);
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    axum::serve(listener, app_router)
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

async fn drivers_handler(
    State(state): State<Arc<ProxyState>>,
    Path(season): Path<u32>,
) -> Response {
    let base_url = state.config.base_url.trim_end_matches('/');
    let url = format!("{base_url}/standings/drivers/{season}");

    if state.verbose {
        eprintln!("Forwarding request to {}", url);
    }

    match state.client.get(&url).send().await {
        Ok(response) => {
            let status = StatusCode::from_u16(response.status().as_u16())
                .unwrap_or(StatusCode::BAD_GATEWAY);
            let body = response.text().await.unwrap_or_default();
            (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        Err(err) => (
            StatusCode::BAD_GATEWAY,
            format!("Upstream request failed: {err}"),
        )
            .into_response(),
    }
}
