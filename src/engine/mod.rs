//! The inference engine: fact store, forward closure, backward proof search
//!
//! `Reasoner` is the engine instance: it owns the rule graph, the fact
//! sets, the proof trace, and the suspended backward-search stack. All
//! state persists between method calls by design; that persistence is what
//! lets a backward search suspend to ask the caller for facts and resume
//! exactly where it left off. One instance serves one logical session;
//! callers running several sessions hold several instances.

mod backward;
mod forward;


pub use backward::BackwardResult;
pub use forward::ForwardResult;

use crate::atoms::AtomId;
use crate::graph::{RuleGraph, RuleId};
use indexmap::IndexSet;
use std::collections::HashSet;

/// A suspended backward-search frame: a goal and the index of the next
/// concluding rule to try for it
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    pub(crate) goal: AtomId,
    pub(crate) next_rule: usize,
}

/// The engine instance
///
/// `known` and `refuted` are kept disjoint by construction: asserting an
/// atom as known retracts it from refuted and vice versa, so the last
/// answer wins.
#[derive(Debug, Clone, Default)]
pub struct Reasoner {
    pub(crate) graph: RuleGraph,
    /// Atoms established true. IndexSet: insertion order seeds the forward
    /// work stack deterministically.
    pub(crate) known: IndexSet<AtomId>,
    /// Atoms established false (by exhausted backward search or the caller)
    pub(crate) refuted: IndexSet<AtomId>,
    /// Rules fired during the current call, in firing order
    pub(crate) trace: Vec<RuleId>,
    /// Dedup set for `trace` (a rule revisited in one call is traced once)
    pub(crate) traced: HashSet<RuleId>,
    /// Reified call stack of the suspended backward search
    pub(crate) stack: Vec<Frame>,
    /// Target of the suspended backward session, if any
    pub(crate) session: Option<AtomId>,
}

impl Reasoner {
    /// Create an engine with no rules; supply them via [`Reasoner::reset`]
    pub fn new() -> Self {
        Reasoner::default()
    }

    /// Replace all engine state with a freshly registered rule list.
    ///
    /// Every rule's premise and conclusion names are interned in input
    /// order, which fixes atom and rule ids for the session. This is the
    /// only way rules enter the engine.
    pub fn reset(&mut self, rules: &[(Vec<String>, String)]) {
        self.graph.clear();
        self.known.clear();
        self.refuted.clear();
        self.trace.clear();
        self.traced.clear();
        self.stack.clear();
        self.session = None;
        for (premises, conclusion) in rules {
            self.graph.add_rule(premises, conclusion);
        }
    }

    /// Assert atoms as known facts, interning names on first sight
    pub fn add_known<S: AsRef<str>>(&mut self, names: &[S]) {
        for name in names {
            let id = self.graph.intern(name.as_ref());
            self.refuted.shift_remove(&id);
            self.known.insert(id);
        }
    }

    /// Empty the known set and discard the current proof trace
    pub fn clear_known(&mut self) {
        self.known.clear();
        self.trace.clear();
        self.traced.clear();
    }

    /// Assert atoms as false facts, interning names on first sight
    pub fn add_false<S: AsRef<str>>(&mut self, names: &[S]) {
        for name in names {
            let id = self.graph.intern(name.as_ref());
            self.known.shift_remove(&id);
            self.refuted.insert(id);
        }
    }

    /// Empty the false set
    pub fn clear_false(&mut self) {
        self.refuted.clear();
    }

    /// The rule graph (read access, e.g. for rendering traces)
    pub fn graph(&self) -> &RuleGraph {
        &self.graph
    }

    /// Names of the atoms currently known true, in insertion order
    pub fn known_atoms(&self) -> Vec<&str> {
        self.known
            .iter()
            .map(|&a| self.graph.atoms().resolve(a))
            .collect()
    }

    /// Names of the atoms currently known false, in insertion order
    pub fn false_atoms(&self) -> Vec<&str> {
        self.refuted
            .iter()
            .map(|&a| self.graph.atoms().resolve(a))
            .collect()
    }

    /// Whether `name` is currently in the known set
    pub fn is_known(&self, name: &str) -> bool {
        self.graph
            .atoms()
            .get(name)
            .is_some_and(|id| self.known.contains(&id))
    }
}
