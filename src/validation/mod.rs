//! Domain validation: the violation taxonomy and its reporting layer.
//!
//! Validation here is single-shot and fail-fast: each rule is checked at
//! construction or at the mutating call that could break it, and the first
//! breach aborts that operation with a [`Violation`]. Every raise also
//! appends one line to the audit trail through the [`Auditor`] — the
//! raise ⇒ log coupling is part of the contract, not incidental.

mod reporter;
mod violations;

pub use reporter::Auditor;
pub use violations::Violation;
