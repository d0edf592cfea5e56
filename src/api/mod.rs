use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::clients::{self, omdb::OmdbClient, streaming::StreamingClient};
use crate::config::Config;

mod error;
mod home;
mod movie;
mod streaming;

pub use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    pub omdb: Arc<OmdbClient>,

    pub streaming: Arc<StreamingClient>,
}

pub fn create_app_state(config: Config) -> anyhow::Result<Arc<AppState>> {
    let http_client = clients::build_http_client(config.http.request_timeout_secs)?;

    let omdb = Arc::new(OmdbClient::new(http_client.clone(), &config.omdb));
    let streaming = Arc::new(StreamingClient::new(http_client, &config.streaming));

    Ok(Arc::new(AppState {
        config: Arc::new(config),
        omdb,
        streaming,
    }))
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/movie", get(movie::lookup_form).post(movie::lookup))
        .route(
            "/streaming",
            get(streaming::lookup_form).post(streaming::lookup),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
