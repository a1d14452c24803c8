//! Rule storage and the per-atom adjacency indices
//!
//! Every rule is a Horn clause: an ordered list of premise atoms implying a
//! single conclusion atom. Rules live in an append-only sequence addressed
//! by `RuleId` (a rule's id is its position, stable until `reset`). Two
//! index tables are maintained per atom: the rules concluding it (walked by
//! backward search) and the rules using it as a premise (walked by forward
//! search). Both follow registration order, which is the traversal
//! tie-break order, and are never mutated after registration.

use crate::atoms::{AtomId, AtomTable};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// ID of a registered rule: its position in the registration sequence
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(pub(crate) u32);

impl RuleId {
    /// Get the raw ID value (for debugging/serialization)
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Get the ID as a table index
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

impl Serialize for RuleId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RuleId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(RuleId)
    }
}

/// A Horn clause: `premises[0] ∧ premises[1] ∧ ... → conclusion`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Premise atoms in registration order (order is the ask tie-break)
    pub premises: Vec<AtomId>,
    /// The single concluded atom
    pub conclusion: AtomId,
}

/// The rule graph: atom table, rule sequence, and both adjacency indices
#[derive(Debug, Clone, Default)]
pub struct RuleGraph {
    atoms: AtomTable,
    rules: Vec<Rule>,
    /// Per atom: rules whose conclusion is this atom (backward search)
    concluding: Vec<Vec<RuleId>>,
    /// Per atom: rules where this atom appears as a premise (forward search)
    premise_of: Vec<Vec<RuleId>>,
}

impl RuleGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        RuleGraph::default()
    }

    /// Intern an atom name, keeping the adjacency tables index-aligned with
    /// the atom table. All interning must go through here; atoms can also
    /// first appear at runtime (facts, backward targets), not only in rules.
    pub(crate) fn intern(&mut self, name: &str) -> AtomId {
        let id = self.atoms.intern(name);
        while self.concluding.len() < self.atoms.len() {
            self.concluding.push(Vec::new());
            self.premise_of.push(Vec::new());
        }
        id
    }

    /// Register a rule, wiring it into both indices. Rules only enter via
    /// the engine's bulk `reset`.
    pub(crate) fn add_rule(&mut self, premises: &[String], conclusion: &str) -> RuleId {
        let premise_ids: Vec<AtomId> = premises.iter().map(|p| self.intern(p)).collect();
        let conclusion_id = self.intern(conclusion);
        let id = RuleId(self.rules.len() as u32);
        for &p in &premise_ids {
            self.premise_of[p.index()].push(id);
        }
        self.concluding[conclusion_id.index()].push(id);
        self.rules.push(Rule {
            premises: premise_ids,
            conclusion: conclusion_id,
        });
        id
    }

    /// Drop all rules and atoms
    pub(crate) fn clear(&mut self) {
        self.atoms.clear();
        self.rules.clear();
        self.concluding.clear();
        self.premise_of.clear();
    }

    /// The atom table (read access, e.g. for rendering traces)
    pub fn atoms(&self) -> &AtomTable {
        &self.atoms
    }

    /// All registered rules in id order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Look up a rule by id
    pub fn rule(&self, id: RuleId) -> &Rule {
        &self.rules[id.index()]
    }

    /// Number of registered rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are registered
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules concluding `atom`, in registration order
    pub fn concluding(&self, atom: AtomId) -> &[RuleId] {
        &self.concluding[atom.index()]
    }

    /// Rules with `atom` among their premises, in registration order
    pub fn premise_of(&self, atom: AtomId) -> &[RuleId] {
        &self.premise_of[atom.index()]
    }

    /// Atoms a caller can be asked about: used as a premise somewhere but
    /// concluded by no rule. Names in id order.
    pub fn askable_atoms(&self) -> Vec<&str> {
        (0..self.atoms.len() as u32)
            .map(AtomId)
            .filter(|&a| !self.premise_of(a).is_empty() && self.concluding(a).is_empty())
            .map(|a| self.atoms.resolve(a))
            .collect()
    }

    /// Atoms concluded by at least one rule. Names in id order.
    pub fn conclusion_atoms(&self) -> Vec<&str> {
        (0..self.atoms.len() as u32)
            .map(AtomId)
            .filter(|&a| !self.concluding(a).is_empty())
            .map(|a| self.atoms.resolve(a))
            .collect()
    }
}
