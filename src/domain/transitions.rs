// src/domain/transitions.rs
//
// Request lifecycle:
//
//   Pending ──approve──> Approved   (terminal)
//      └─────reject────> Rejected   (terminal)
//
// Delete and comments are legal from any state and never touch `status`.

use crate::domain::request::Status;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    Approve,
    Reject,
}

impl ReviewAction {
    pub fn target(self) -> Status {
        match self {
            ReviewAction::Approve => Status::Approved,
            ReviewAction::Reject => Status::Rejected,
        }
    }
}

impl fmt::Display for ReviewAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewAction::Approve => f.write_str("approve"),
            ReviewAction::Reject => f.write_str("reject"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot {action} a request that is already {from}")]
pub struct TransitionError {
    pub from: Status,
    pub action: ReviewAction,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::Pending)
    }

    /// The status after `action`, or an error leaving `self` untouched.
    pub fn transition(self, action: ReviewAction) -> Result<Status, TransitionError> {
        match self {
            Status::Pending => Ok(action.target()),
            from => Err(TransitionError { from, action }),
        }
    }

    pub fn approve(self) -> Result<Status, TransitionError> {
        self.transition(ReviewAction::Approve)
    }

    pub fn reject(self) -> Result<Status, TransitionError> {
        self.transition(ReviewAction::Reject)
    }
}
