use axum::{Form, extract::State, response::Html};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use super::{ApiError, AppState};
use crate::clients::omdb::MovieLookup;
use crate::templates::{self, MovieFormTemplate, MovieTemplate};

#[derive(Debug, Deserialize)]
pub struct LookupForm {
    #[serde(default)]
    pub user_input: String,
}

pub async fn lookup_form() -> Result<Html<String>, ApiError> {
    templates::render(&MovieFormTemplate)
}

pub async fn lookup(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LookupForm>,
) -> Result<Html<String>, ApiError> {
    // Empty input short-circuits before any outbound call.
    if form.user_input.is_empty() {
        return Err(ApiError::validation("Please type a movie!"));
    }

    debug!("Movie lookup for {:?}", form.user_input);

    let lookup = state
        .omdb
        .lookup_title(&form.user_input)
        .await
        .map_err(|e| ApiError::omdb_error(e.to_string()))?;

    match lookup {
        MovieLookup::NotFound => Err(ApiError::movie_not_found()),
        MovieLookup::Found(record) => {
            templates::render(&MovieTemplate::from_record(&form.user_input, &record))
        }
    }
}
