use askama::Template;
use axum::response::{Html, IntoResponse};

use crate::error::AppError;
use crate::form::document::{Field, FORM_ID, MESSAGE_ID};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    form_id: &'static str,
    message_id: &'static str,
    fields: Vec<FieldInput>,
}

struct FieldInput {
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
}

#[derive(Template)]
#[template(path = "success.html")]
struct SuccessTemplate {
    home: &'static str,
}

pub async fn index() -> Result<impl IntoResponse, AppError> {
    let template = IndexTemplate {
        form_id: FORM_ID,
        message_id: MESSAGE_ID,
        fields: Field::ALL
            .iter()
            .map(|f| FieldInput {
                id: f.id(),
                label: f.label(),
                input_type: f.input_type(),
            })
            .collect(),
    };
    render(&template)
}

pub async fn success() -> Result<impl IntoResponse, AppError> {
    render(&SuccessTemplate { home: "/" })
}

fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    template
        .render()
        .map(Html)
        .map_err(|e| AppError::Internal(format!("Template render failed: {e}")))
}
