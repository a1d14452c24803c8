//! JSON view types resolving rule ids back to atom names
//!
//! The engine reports proof traces as bare rule ids; these views carry the
//! resolved names so a caller can render or ship an explanation without
//! holding the rule graph.

use crate::graph::{Rule, RuleGraph, RuleId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// JSON representation of a rule with resolved names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleJson {
    pub id: u32,
    pub premises: Vec<String>,
    pub conclusion: String,
}

impl RuleJson {
    pub fn from_rule(id: RuleId, rule: &Rule, graph: &RuleGraph) -> Self {
        let atoms = graph.atoms();
        RuleJson {
            id: id.as_u32(),
            premises: rule
                .premises
                .iter()
                .map(|&p| atoms.resolve(p).to_string())
                .collect(),
            conclusion: atoms.resolve(rule.conclusion).to_string(),
        }
    }
}

impl fmt::Display for RuleJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.premises.join(", "), self.conclusion)
    }
}

/// JSON representation of a proof trace: the fired rules in firing order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceJson {
    pub steps: Vec<RuleJson>,
}

impl TraceJson {
    pub fn from_trace(trace: &[RuleId], graph: &RuleGraph) -> Self {
        TraceJson {
            steps: trace
                .iter()
                .map(|&id| RuleJson::from_rule(id, graph.rule(id), graph))
                .collect(),
        }
    }
}
