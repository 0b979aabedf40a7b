//! Client half: the form submit handler, driven through an explicit [`Document`].

pub mod document;
pub mod payload;
pub mod submitter;

pub use document::{Document, Field, HeadlessDocument, SubmitEvent};
pub use payload::{Payload, SubmitResponse};
pub use submitter::{FormSubmitter, SubmitOutcome};

#[derive(Debug)]
pub enum SubmitError {
    InvalidBaseUrl(String),
    Request(String),
    Decode(String),
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::InvalidBaseUrl(msg) => write!(f, "Invalid base URL: {msg}"),
            SubmitError::Request(msg) => write!(f, "Request failed: {msg}"),
            SubmitError::Decode(msg) => write!(f, "Invalid response body: {msg}"),
        }
    }
}

impl std::error::Error for SubmitError {}
