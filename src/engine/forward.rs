//! Forward chaining: fixpoint closure of the known set
//!
//! A work stack is seeded with every known atom; popping an atom either
//! reports it as a terminal (it is never a premise of any rule) or tries
//! every rule it feeds, firing those whose premises are all known and whose
//! conclusion is still new. Fired conclusions join the known set and the
//! work stack, so each atom is processed at most once and the loop always
//! terminates.

use super::Reasoner;
use crate::atoms::AtomId;
use crate::graph::RuleId;

/// Result of one forward pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardResult {
    /// Newly reached terminal atoms: atoms that are never a premise of any
    /// rule. Classification depends only on the graph's shape, so terminals
    /// already known before the call are reported too.
    pub terminals: Vec<String>,
    /// Rules fired during this call, in firing order
    pub trace: Vec<RuleId>,
}

impl Reasoner {
    /// Derive everything reachable from the current known set.
    ///
    /// The known set only grows here; the proof trace is cleared at the
    /// start of the call, so the returned trace covers exactly this call's
    /// firings.
    pub fn find(&mut self) -> ForwardResult {
        self.trace.clear();
        self.traced.clear();

        let mut terminals = Vec::new();
        let mut work: Vec<AtomId> = self.known.iter().copied().collect();

        while let Some(u) = work.pop() {
            let fanout = self.graph.premise_of(u);
            if fanout.is_empty() {
                terminals.push(self.graph.atoms().resolve(u).to_string());
                continue;
            }
            for &rule_id in fanout {
                let rule = self.graph.rule(rule_id);
                if self.known.contains(&rule.conclusion) {
                    continue;
                }
                if rule.premises.iter().all(|p| self.known.contains(p)) {
                    // A rule fires at most once per call: its conclusion is
                    // known from here on.
                    self.trace.push(rule_id);
                    self.known.insert(rule.conclusion);
                    work.push(rule.conclusion);
                }
            }
        }

        ForwardResult {
            terminals,
            trace: self.trace.clone(),
        }
    }
}
