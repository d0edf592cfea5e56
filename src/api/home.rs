use axum::response::Html;

use super::ApiError;
use crate::templates::{self, HomeTemplate};

pub async fn index() -> Result<Html<String>, ApiError> {
    templates::render(&HomeTemplate)
}
