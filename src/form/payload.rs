use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::document::{Document, Field};

/// The three captured field values, sent as the JSON body of `POST /submit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    pub name: String,
    pub email: String,
    pub extra: String,
}

impl Payload {
    /// Read the current control values. Nothing is trimmed or validated.
    pub fn from_document<D: Document + ?Sized>(doc: &D) -> Self {
        Self {
            name: doc.field_value(Field::Name),
            email: doc.field_value(Field::Email),
            extra: doc.field_value(Field::Extra),
        }
    }
}

/// Body of the `/submit` response. Both fields are read optimistically.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub success: Value,
    #[serde(default)]
    pub error: Value,
}

impl From<Value> for SubmitResponse {
    /// Any JSON body is accepted; a non-object reads as a response with neither field.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut map) => Self {
                success: map.remove("success").unwrap_or(Value::Null),
                error: map.remove("error").unwrap_or(Value::Null),
            },
            _ => Self::default(),
        }
    }
}

impl SubmitResponse {
    pub fn is_success(&self) -> bool {
        is_truthy(&self.success)
    }

    /// Text shown in the message element when `success` is falsy.
    ///
    /// A missing or `null` error shows as an empty string. Strings are shown as-is and
    /// any other JSON value as its compact JSON text.
    pub fn error_text(&self) -> String {
        match &self.error {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Truthiness as a browser script would evaluate it.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
