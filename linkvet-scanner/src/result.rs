use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of probing a single URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub url: String,
    pub outcome: CheckOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckOutcome {
    Reachable { status: u16 },
    Unreachable { reason: UnreachableReason },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnreachableReason {
    /// The request exceeded the per-request timeout.
    Timeout,
    /// Connection-level failure (refused, DNS, TLS, ...).
    Connect(String),
    /// The server answered, but not with a success status.
    Status(u16),
}

impl CheckResult {
    pub fn reachable(url: String, status: u16) -> Self {
        Self {
            url,
            outcome: CheckOutcome::Reachable { status },
        }
    }

    pub fn unreachable(url: String, reason: UnreachableReason) -> Self {
        Self {
            url,
            outcome: CheckOutcome::Unreachable { reason },
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self.outcome, CheckOutcome::Reachable { .. })
    }
}

impl fmt::Display for UnreachableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnreachableReason::Timeout => write!(f, "timed out"),
            UnreachableReason::Connect(msg) => write!(f, "connection failed: {}", msg),
            UnreachableReason::Status(code) => write!(f, "status {}", code),
        }
    }
}
