//! Backward chaining: a resumable depth-first proof search
//!
//! The search is written as an iterative state machine over an explicit
//! frame stack instead of native recursion, so it can suspend mid-proof
//! (returning [`BackwardResult::Ask`]) and resume later with identical
//! progress once the caller has supplied the missing facts. The stack, the
//! fact sets, and the session target all live on the engine between calls.

use super::{Frame, Reasoner};
use crate::graph::RuleId;

/// Outcome of one backward-search call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackwardResult {
    /// Target proven true
    Proven {
        target: String,
        /// Rules fired during this call, deduplicated, in firing order
        trace: Vec<RuleId>,
    },
    /// Target refuted: every way of proving it is exhausted
    Disproven { trace: Vec<RuleId> },
    /// Search suspended: the listed atomic facts must be resolved via
    /// `add_known`/`add_false` before calling again with the same target
    Ask {
        /// Unresolved atomic premises of the rule being attempted, in
        /// premise registration order
        facts: Vec<String>,
        trace: Vec<RuleId>,
    },
}

impl Reasoner {
    /// Try to prove `target` under the current fact sets, asking the caller
    /// for atomic facts the rules cannot derive.
    ///
    /// Calling again with the same target resumes the suspended search;
    /// calling with a different target silently discards it and starts
    /// fresh. Goals whose concluding rules are all exhausted are recorded
    /// as false for the rest of the session (negation as failure) and
    /// short-circuit any later rule listing them as a premise.
    ///
    /// Known limitation: a rule graph cyclic through conclusions (X only
    /// provable via Y, Y only via X) makes this search loop without
    /// terminating. Rule sets are expected to be acyclic.
    pub fn step_backward(&mut self, target: &str) -> BackwardResult {
        let target_id = self.graph.intern(target);
        self.trace.clear();
        self.traced.clear();

        if self.session != Some(target_id) {
            self.stack.clear();
            self.stack.push(Frame {
                goal: target_id,
                next_rule: 0,
            });
            self.session = Some(target_id);
        }

        while let Some(&Frame { goal, next_rule }) = self.stack.last() {
            if self.known.contains(&goal) || self.refuted.contains(&goal) {
                // Already resolved, either way: hand back to the parent frame
                self.stack.pop();
                continue;
            }

            let rules = self.graph.concluding(goal);
            if next_rule >= rules.len() {
                // Negation as failure: no way left to prove this goal
                self.refuted.insert(goal);
                self.stack.pop();
                continue;
            }

            let rule_id = rules[next_rule];
            let rule = self.graph.rule(rule_id);

            // Scan the premises in registration order. The scan classifies
            // each unresolved premise as either an atomic fact to ask about
            // (no concluding rules of its own) or a subgoal to descend into;
            // only the first subgoal is pursued, the frame itself is retried
            // once it resolves.
            let mut viable = true;
            let mut subgoal = None;
            let mut to_ask = Vec::new();
            for &premise in &rule.premises {
                if self.refuted.contains(&premise) {
                    viable = false;
                    break;
                }
                if self.known.contains(&premise) {
                    continue;
                }
                if self.graph.concluding(premise).is_empty() {
                    to_ask.push(self.graph.atoms().resolve(premise).to_string());
                } else if subgoal.is_none() {
                    subgoal = Some(premise);
                }
            }

            if !viable {
                if let Some(top) = self.stack.last_mut() {
                    top.next_rule += 1;
                }
                continue;
            }

            if let Some(subgoal) = subgoal {
                self.stack.push(Frame {
                    goal: subgoal,
                    next_rule: 0,
                });
                continue;
            }

            if !to_ask.is_empty() {
                // Suspend with the stack left exactly as-is; the next call
                // with the same target resumes at this point.
                return BackwardResult::Ask {
                    facts: to_ask,
                    trace: self.trace.clone(),
                };
            }

            // Every premise known: the rule succeeds and proves the goal
            self.known.insert(goal);
            if self.traced.insert(rule_id) {
                self.trace.push(rule_id);
            }
            self.stack.pop();
        }

        self.session = None;
        if self.known.contains(&target_id) {
            BackwardResult::Proven {
                target: target.to_string(),
                trace: self.trace.clone(),
            }
        } else {
            BackwardResult::Disproven {
                trace: self.trace.clone(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(rules: &[(&[&str], &str)]) -> Vec<(Vec<String>, String)> {
        rules
            .iter()
            .map(|(premises, conclusion)| {
                (
                    premises.iter().map(|s| s.to_string()).collect(),
                    conclusion.to_string(),
                )
            })
            .collect()
    }

    #[test]
    fn test_proven_from_known_premises() {
        let mut engine = Reasoner::new();
        engine.reset(&rules(&[(&["feathers", "flies"], "bird")]));
        engine.add_known(&["feathers", "flies"]);

        match engine.step_backward("bird") {
            BackwardResult::Proven { target, trace } => {
                assert_eq!(target, "bird");
                assert_eq!(trace.iter().map(|r| r.as_u32()).collect::<Vec<_>>(), vec![0]);
            }
            other => panic!("expected Proven, got {:?}", other),
        }
    }

    #[test]
    fn test_ask_lists_premises_in_registration_order() {
        let mut engine = Reasoner::new();
        engine.reset(&rules(&[(&["feathers", "flies"], "bird")]));

        match engine.step_backward("bird") {
            BackwardResult::Ask { facts, trace } => {
                assert_eq!(facts, vec!["feathers", "flies"]);
                assert!(trace.is_empty());
            }
            other => panic!("expected Ask, got {:?}", other),
        }
    }

    #[test]
    fn test_resume_after_answers() {
        let mut engine = Reasoner::new();
        engine.reset(&rules(&[(&["feathers", "flies"], "bird")]));

        assert!(matches!(
            engine.step_backward("bird"),
            BackwardResult::Ask { .. }
        ));
        engine.add_known(&["feathers"]);
        engine.add_known(&["flies"]);

        match engine.step_backward("bird") {
            BackwardResult::Proven { target, trace } => {
                assert_eq!(target, "bird");
                assert_eq!(trace.iter().map(|r| r.as_u32()).collect::<Vec<_>>(), vec![0]);
            }
            other => panic!("expected Proven after resume, got {:?}", other),
        }
    }

    #[test]
    fn test_unprovable_target_is_disproven() {
        let mut engine = Reasoner::new();
        engine.reset(&rules(&[(&["a"], "b")]));

        match engine.step_backward("nothing_concludes_me") {
            BackwardResult::Disproven { trace } => assert!(trace.is_empty()),
            other => panic!("expected Disproven, got {:?}", other),
        }
    }

    #[test]
    fn test_rules_tried_in_registration_order() {
        // Two ways to prove c; the first-registered one is asked first
        let mut engine = Reasoner::new();
        engine.reset(&rules(&[(&["a"], "c"), (&["b"], "c")]));

        match engine.step_backward("c") {
            BackwardResult::Ask { facts, .. } => assert_eq!(facts, vec!["a"]),
            other => panic!("expected Ask, got {:?}", other),
        }
    }

    #[test]
    fn test_refuted_premise_falls_through_to_next_rule() {
        let mut engine = Reasoner::new();
        engine.reset(&rules(&[(&["a"], "c"), (&["b"], "c")]));
        engine.add_false(&["a"]);

        match engine.step_backward("c") {
            BackwardResult::Ask { facts, .. } => assert_eq!(facts, vec!["b"]),
            other => panic!("expected Ask for second rule, got {:?}", other),
        }
    }

    #[test]
    fn test_target_already_known() {
        let mut engine = Reasoner::new();
        engine.reset(&rules(&[(&["a"], "b")]));
        engine.add_known(&["b"]);

        match engine.step_backward("b") {
            BackwardResult::Proven { target, trace } => {
                assert_eq!(target, "b");
                assert!(trace.is_empty());
            }
            other => panic!("expected Proven, got {:?}", other),
        }
    }

    #[test]
    fn test_new_target_discards_suspended_session() {
        let mut engine = Reasoner::new();
        engine.reset(&rules(&[(&["a"], "x"), (&["b"], "y")]));

        assert!(matches!(
            engine.step_backward("x"),
            BackwardResult::Ask { .. }
        ));
        // Different target: the suspended x-session is dropped
        assert!(matches!(
            engine.step_backward("y"),
            BackwardResult::Ask { .. }
        ));
        // Returning to x starts over and asks again
        match engine.step_backward("x") {
            BackwardResult::Ask { facts, .. } => assert_eq!(facts, vec!["a"]),
            other => panic!("expected Ask, got {:?}", other),
        }
    }

    #[test]
    fn test_subgoal_descent() {
        // g needs a, a needs p; p is atomic so it is asked, not descended
        let mut engine = Reasoner::new();
        engine.reset(&rules(&[(&["p"], "a"), (&["a"], "g")]));

        match engine.step_backward("g") {
            BackwardResult::Ask { facts, .. } => assert_eq!(facts, vec!["p"]),
            other => panic!("expected Ask for atomic leaf, got {:?}", other),
        }

        engine.add_known(&["p"]);
        match engine.step_backward("g") {
            BackwardResult::Proven { trace, .. } => {
                assert_eq!(
                    trace.iter().map(|r| r.as_u32()).collect::<Vec<_>>(),
                    vec![0, 1]
                );
            }
            other => panic!("expected Proven, got {:?}", other),
        }
    }

    #[test]
    fn test_negation_as_failure_persists() {
        // r0: p => a; r1: a => g; r2: q => g
        let mut engine = Reasoner::new();
        engine.reset(&rules(&[(&["p"], "a"), (&["a"], "g"), (&["q"], "g")]));

        match engine.step_backward("g") {
            BackwardResult::Ask { facts, .. } => assert_eq!(facts, vec!["p"]),
            other => panic!("expected Ask, got {:?}", other),
        }

        // p is false, so a's only rule dies, a becomes false, and r1 is
        // skipped without revisiting a; the search moves on to r2
        engine.add_false(&["p"]);
        match engine.step_backward("g") {
            BackwardResult::Ask { facts, .. } => assert_eq!(facts, vec!["q"]),
            other => panic!("expected Ask for q, got {:?}", other),
        }
        assert!(engine.false_atoms().contains(&"a"));

        engine.add_known(&["q"]);
        match engine.step_backward("g") {
            BackwardResult::Proven { trace, .. } => {
                assert_eq!(trace.iter().map(|r| r.as_u32()).collect::<Vec<_>>(), vec![2]);
            }
            other => panic!("expected Proven via q, got {:?}", other),
        }
    }

    #[test]
    fn test_exhausted_goal_disproves_target() {
        let mut engine = Reasoner::new();
        engine.reset(&rules(&[(&["p"], "g")]));
        engine.add_false(&["p"]);

        match engine.step_backward("g") {
            BackwardResult::Disproven { trace } => assert!(trace.is_empty()),
            other => panic!("expected Disproven, got {:?}", other),
        }
        // Session over: asking again restarts (and still fails)
        assert!(matches!(
            engine.step_backward("g"),
            BackwardResult::Disproven { .. }
        ));
    }

    #[test]
    fn test_trace_ids_unique_in_diamond_proof() {
        // t needs m and a; both sides go through m's rule
        let mut engine = Reasoner::new();
        engine.reset(&rules(&[(&["f"], "m"), (&["m"], "a"), (&["m", "a"], "t")]));
        engine.add_known(&["f"]);

        match engine.step_backward("t") {
            BackwardResult::Proven { trace, .. } => {
                let ids: Vec<u32> = trace.iter().map(|r| r.as_u32()).collect();
                let mut unique = ids.clone();
                unique.sort();
                unique.dedup();
                assert_eq!(ids.len(), unique.len(), "trace has duplicate rule ids");
                assert_eq!(ids, vec![0, 1, 2]);
            }
            other => panic!("expected Proven, got {:?}", other),
        }
    }
}
