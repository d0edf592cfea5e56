use askama::Template;
use axum::response::Html;
use serde_json::Value;

use crate::api::ApiError;
use crate::clients::omdb::MovieRecord;
use crate::clients::streaming::StreamingOffer;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate;

#[derive(Template)]
#[template(path = "movie_form.html")]
pub struct MovieFormTemplate;

#[derive(Template)]
#[template(path = "streaming_form.html")]
pub struct StreamingFormTemplate;

#[derive(Template)]
#[template(path = "movie.html")]
pub struct MovieTemplate {
    pub user_input: String,
    pub title: String,
    pub year: String,
    pub poster: String,
    pub fields: Vec<(String, String)>,
}

impl MovieTemplate {
    pub fn from_record(user_input: &str, record: &MovieRecord) -> Self {
        let poster = record
            .field("Poster")
            .filter(|url| *url != "N/A")
            .unwrap_or_default()
            .to_string();

        Self {
            user_input: user_input.to_string(),
            title: record.field("Title").unwrap_or(user_input).to_string(),
            year: record.field("Year").unwrap_or_default().to_string(),
            poster,
            fields: record
                .entries()
                .map(|(key, value)| (key.clone(), display_value(value)))
                .collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "streaming.html")]
pub struct StreamingTemplate {
    pub user_input: String,
    pub offers: Vec<StreamingOffer>,
}

pub fn render<T: Template>(template: &T) -> Result<Html<String>, ApiError> {
    template
        .render()
        .map(Html)
        .map_err(|e| ApiError::internal(format!("Template rendering failed: {e}")))
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
