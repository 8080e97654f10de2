//! Per-browser session: the form, the last result list, the loading flag and
//! the user-facing error. All submission state transitions live here.

pub mod store;

use thiserror::Error;
use tracing::{error, info};

use crate::form::JobForm;
use crate::match_client::{CandidateMatcher, MatchError};
use crate::models::candidate::CandidateMatch;
use crate::models::job::Job;

pub const MATCH_FAILED_MESSAGE: &str = "Failed to match candidates. Please try again.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("a match request is already in flight")]
    InFlight,

    #[error("the job form has validation errors")]
    Invalid,
}

#[derive(Debug, Default)]
pub struct Session {
    pub form: JobForm,
    /// `None` until the first successful response.
    matches: Option<Vec<CandidateMatch>>,
    loading: bool,
    error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn matches(&self) -> Option<&[CandidateMatch]> {
        self.matches.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Starts a submission: validates the form and, if it passes, marks the
    /// session as loading and returns the job to send.
    pub fn begin_submit(&mut self) -> Result<Job, SubmitRejected> {
        if self.loading {
            return Err(SubmitRejected::InFlight);
        }

        let job = self.form.submit().ok_or(SubmitRejected::Invalid)?;

        self.loading = true;
        self.error = None;
        Ok(job)
    }

    /// Applies the outcome of a submission. Loading is always cleared.
    ///
    /// A failure leaves any earlier results in place next to the error.
    pub fn complete(&mut self, result: Result<Vec<CandidateMatch>, MatchError>) {
        match result {
            Ok(matches) => {
                info!(count = matches.len(), "Received candidate matches");
                self.matches = Some(matches);
            }
            Err(e) => {
                error!(error = %e, "Error matching candidates");
                self.error = Some(MATCH_FAILED_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }

    /// Ends a submission whose request never produced an outcome.
    pub fn abort_submit(&mut self) {
        self.error = Some(MATCH_FAILED_MESSAGE.to_string());
        self.loading = false;
    }

    /// Full submit cycle for a single owner.
    pub async fn submit(&mut self, matcher: &dyn CandidateMatcher) -> Result<(), SubmitRejected> {
        let job = self.begin_submit()?;
        let result = matcher.match_candidates(&job).await;
        self.complete(result);
        Ok(())
    }
}
