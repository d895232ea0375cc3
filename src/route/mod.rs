//! Route-alternative classification, selection, and request lifecycle.

mod query;
mod selector;

pub use query::{DEFAULT_DEBOUNCE, Debouncer};
pub use selector::{AlternativeSelector, QueryOutcome};
