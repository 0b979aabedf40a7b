use std::sync::atomic::{AtomicBool, Ordering};

use reqwest::Url;
use serde_json::Value;

use super::document::{Document, SubmitEvent};
use super::payload::{Payload, SubmitResponse};
use super::SubmitError;

pub const SUBMIT_PATH: &str = "/submit";
pub const SUCCESS_PATH: &str = "/success";

/// Shown when the request cannot be completed or its answer cannot be read.
pub const GENERIC_FAILURE_MESSAGE: &str = "Unable to submit the form. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The server accepted the payload and the page navigated to the success path.
    Redirected,
    /// The server declined; `message` was written to the message element.
    Rejected { message: String },
    /// Another submission was still in flight.
    Skipped,
}

/// Posts the form to the server and applies the answer to the page.
pub struct FormSubmitter {
    client: reqwest::Client,
    submit_url: Url,
    in_flight: Option<AtomicBool>,
}

impl FormSubmitter {
    /// `base_url` is the origin the page was loaded from, e.g. `http://localhost:5000`.
    pub fn new(base_url: &str) -> Result<Self, SubmitError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, SubmitError> {
        let submit_url = Url::parse(base_url)
            .and_then(|base| base.join(SUBMIT_PATH))
            .map_err(|e| SubmitError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        Ok(Self {
            client,
            submit_url,
            in_flight: None,
        })
    }

    /// Drop submits that arrive while a previous one is still pending.
    pub fn with_in_flight_guard(mut self) -> Self {
        self.in_flight = Some(AtomicBool::new(false));
        self
    }

    pub fn submit_url(&self) -> &Url {
        &self.submit_url
    }

    /// Handle one submit event.
    ///
    /// Default navigation is suppressed before anything else. On success the page is
    /// sent to [`SUCCESS_PATH`]; otherwise the server's error text goes to the message
    /// element. Transport and decode failures write [`GENERIC_FAILURE_MESSAGE`] and
    /// return the error.
    pub async fn on_submit<D: Document + ?Sized>(
        &self,
        event: &mut SubmitEvent,
        doc: &mut D,
    ) -> Result<SubmitOutcome, SubmitError> {
        event.prevent_default();

        let _guard = match &self.in_flight {
            Some(flag) => match InFlight::claim(flag) {
                Some(guard) => Some(guard),
                None => {
                    tracing::debug!("Submission already in flight, skipping");
                    return Ok(SubmitOutcome::Skipped);
                }
            },
            None => None,
        };

        let payload = Payload::from_document(doc);

        let result = match self.send(&payload).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("Form submission failed: {e}");
                doc.set_message(GENERIC_FAILURE_MESSAGE);
                return Err(e);
            }
        };

        if result.is_success() {
            doc.replace_location(SUCCESS_PATH);
            Ok(SubmitOutcome::Redirected)
        } else {
            let message = result.error_text();
            doc.set_message(&message);
            Ok(SubmitOutcome::Rejected { message })
        }
    }

    async fn send(&self, payload: &Payload) -> Result<SubmitResponse, SubmitError> {
        let resp = self
            .client
            .post(self.submit_url.clone())
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmitError::Request(e.to_string()))?;

        tracing::debug!("POST {} -> {}", self.submit_url, resp.status());

        let body = resp
            .bytes()
            .await
            .map_err(|e| SubmitError::Request(e.to_string()))?;

        let value: Value =
            serde_json::from_slice(&body).map_err(|e| SubmitError::Decode(e.to_string()))?;

        Ok(SubmitResponse::from(value))
    }
}

struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn claim(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
