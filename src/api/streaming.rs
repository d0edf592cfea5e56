use axum::{Form, extract::State, response::Html};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use super::{ApiError, AppState};
use crate::constants::limits::MAX_STREAMING_OFFERS;
use crate::templates::{self, StreamingFormTemplate, StreamingTemplate};

#[derive(Debug, Deserialize)]
pub struct LookupForm {
    #[serde(default)]
    pub user_input: String,
}

/// A plain GET has nothing to look up, so it renders the empty form instead
/// of a result page.
pub async fn lookup_form() -> Result<Html<String>, ApiError> {
    templates::render(&StreamingFormTemplate)
}

pub async fn lookup(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LookupForm>,
) -> Result<Html<String>, ApiError> {
    debug!("Streaming lookup for {:?}", form.user_input);

    let mut offers = state
        .streaming
        .search_title(&form.user_input)
        .await
        .map_err(|e| ApiError::streaming_error(e.to_string()))?;

    offers.truncate(MAX_STREAMING_OFFERS);

    templates::render(&StreamingTemplate {
        user_input: form.user_input,
        offers,
    })
}
