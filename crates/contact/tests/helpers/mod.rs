#![allow(dead_code)]

use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use folio_contact::{ContactSubmission, Relay, RelayError, RelayResponse};
use reqwest::StatusCode;

pub enum Outcome {
    Respond(StatusCode, &'static str),
    Unreachable,
}

/// Relay double counting every dispatch.
pub struct StubRelay {
    outcome: Outcome,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl StubRelay {
    pub fn new(outcome: Outcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            delay: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn slow(outcome: Outcome, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            delay: Some(delay),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Relay for StubRelay {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn dispatch(&self, _submission: &ContactSubmission) -> Result<RelayResponse, RelayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match self.outcome {
            Outcome::Respond(status, body) => Ok(RelayResponse {
                status,
                body: body.to_owned(),
            }),
            // An unparsable URL fails inside reqwest without touching the network.
            Outcome::Unreachable => Err(reqwest::get("http://").await.unwrap_err().into()),
        }
    }
}

pub fn jane() -> ContactSubmission {
    ContactSubmission::new("Jane", "jane@x.com", "Hi", "Hello")
}
