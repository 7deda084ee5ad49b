use std::sync::{
    Mutex, MutexGuard, PoisonError,
    atomic::{AtomicBool, Ordering},
};

use crate::{ContactSubmission, SubmissionGateway, SubmissionResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl FormStatus {
    pub fn message(&self) -> Option<&str> {
        match self {
            FormStatus::Succeeded(message) | FormStatus::Failed(message) => Some(message),
            FormStatus::Idle | FormStatus::Submitting => None,
        }
    }
}

#[derive(Default)]
struct State {
    fields: ContactSubmission,
    status: FormStatus,
}

/// Transient state of one contact form: its input values and where the last
/// submission stands.
///
/// Only one submission may be in flight at a time; a second `submit` while
/// one is pending is ignored, as a disabled submit button would be.
#[derive(Default)]
pub struct FormCapture {
    state: Mutex<State>,
    in_flight: AtomicBool,
}

struct InFlight<'a> {
    capture: &'a FormCapture,
    settled: bool,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            let mut state = self.capture.state();
            if state.status == FormStatus::Submitting {
                state.status = FormStatus::Idle;
            }
        }

        self.capture.in_flight.store(false, Ordering::Release);
    }
}

impl FormCapture {
    pub fn with_fields(fields: ContactSubmission) -> Self {
        Self {
            state: Mutex::new(State {
                fields,
                status: FormStatus::Idle,
            }),
            in_flight: AtomicBool::new(false),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn fields(&self) -> ContactSubmission {
        self.state().fields.clone()
    }

    pub fn status(&self) -> FormStatus {
        self.state().status.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submit the current input values through `gateway`.
    ///
    /// Returns `None` when a submission is already in flight. Gateway errors
    /// never escape: they become the generic failure result.
    pub async fn submit<G>(&self, gateway: &G) -> Option<SubmissionResult>
    where
        G: SubmissionGateway + ?Sized,
    {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("Contact form submission already in flight");
            return None;
        }

        let mut guard = InFlight {
            capture: self,
            settled: false,
        };

        let fields = {
            let mut state = self.state();
            state.status = FormStatus::Submitting;
            state.fields.clone()
        };

        let result = match gateway.submit(fields).await {
            Ok(result) => result,
            Err(err) => {
                tracing::error!(error = %err, "Form submission error");
                SubmissionResult::failure()
            }
        };

        {
            let mut state = self.state();
            if result.success {
                state.fields = ContactSubmission::default();
                state.status = FormStatus::Succeeded(result.message.to_owned());
            } else {
                state.status = FormStatus::Failed(result.message.to_owned());
            }
        }

        guard.settled = true;
        drop(guard);

        Some(result)
    }
}
