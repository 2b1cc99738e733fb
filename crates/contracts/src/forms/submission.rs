//! Submission lifecycle
//!
//! idle -> submitting -> success | error. `begin` is the single entry into
//! the submitting state and refuses re-entry, which is what guarantees at
//! most one in-flight submission per questionnaire instance.

use serde::{Deserialize, Serialize};

/// Delay before the post-success redirect back home, in milliseconds.
pub const REDIRECT_DELAY_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionState {
    /// A submit action is accepted when idle or retrying after an error.
    pub fn can_submit(self) -> bool {
        matches!(self, SubmissionState::Idle | SubmissionState::Error)
    }

    /// Enter the submitting state, or `None` if a submission is already in
    /// flight (or already succeeded).
    pub fn begin(self) -> Option<Self> {
        self.can_submit().then_some(SubmissionState::Submitting)
    }

    /// Leave the submitting state with the transport outcome. A no-op from
    /// any other state, so a stale response cannot clobber a later state.
    pub fn finish(self, ok: bool) -> Self {
        if self != SubmissionState::Submitting {
            return self;
        }
        if ok {
            SubmissionState::Success
        } else {
            SubmissionState::Error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_lifecycle_passes_through_submitting() {
        let state = SubmissionState::Idle;
        let state = state.begin().expect("idle accepts submit");
        assert_eq!(state, SubmissionState::Submitting);
        assert_eq!(state.finish(true), SubmissionState::Success);
    }

    #[test]
    fn failed_transport_lands_in_error() {
        let state = SubmissionState::Idle.begin().unwrap();
        assert_eq!(state.finish(false), SubmissionState::Error);
    }

    #[test]
    fn submitting_refuses_reentry() {
        assert_eq!(SubmissionState::Submitting.begin(), None);
    }

    #[test]
    fn error_state_allows_manual_retry() {
        assert_eq!(
            SubmissionState::Error.begin(),
            Some(SubmissionState::Submitting)
        );
    }

    #[test]
    fn success_is_terminal_for_submission() {
        assert_eq!(SubmissionState::Success.begin(), None);
        assert_eq!(SubmissionState::Success.finish(false), SubmissionState::Success);
    }

    #[test]
    fn finish_outside_submitting_is_a_noop() {
        assert_eq!(SubmissionState::Idle.finish(true), SubmissionState::Idle);
        assert_eq!(SubmissionState::Error.finish(true), SubmissionState::Error);
    }
}
