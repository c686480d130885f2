pub mod checker;
pub mod error;
pub mod result;

pub use checker::{Checker, ProgressCallback, ResultCallback};
pub use error::CheckError;
pub use result::{CheckOutcome, CheckResult, UnreachableReason};
