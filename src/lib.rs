//! Hornbeam: a rule-based inference engine over Horn clauses
//!
//! Atoms are opaque named propositions interned to dense integer ids;
//! rules are conjunctions of premise atoms implying one conclusion atom.
//! The engine answers two questions: what is derivable forward from a set
//! of known facts ([`Reasoner::find`]), and can one target atom be proven,
//! interactively asking the caller for facts it cannot derive
//! ([`Reasoner::step_backward`]). Backward search is a resumable state
//! machine: it suspends by returning [`BackwardResult::Ask`] and resumes
//! on the next call with the same target.

pub mod atoms;
pub mod engine;
pub mod error;
pub mod graph;
pub mod json;
pub mod ruleset;

pub use atoms::{AtomId, AtomTable};
pub use engine::{BackwardResult, ForwardResult, Reasoner};
pub use error::{EngineError, Result};
pub use graph::{Rule, RuleGraph, RuleId};
pub use json::{RuleJson, TraceJson};
pub use ruleset::RuleSet;
