//! Rule-set persistence
//!
//! The on-disk layout is the `rules.json` shape the surrounding tooling
//! already uses: `{"rules": [[["premise", ...], "conclusion"], ...]}`.
//! The tuple encoding of each rule is what makes the inner arrays
//! heterogeneous (premise list first, conclusion second).

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// An ordered rule list, as fed to [`crate::Reasoner::reset`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub rules: Vec<(Vec<String>, String)>,
}

impl RuleSet {
    pub fn new(rules: Vec<(Vec<String>, String)>) -> Self {
        RuleSet { rules }
    }

    /// Parse a rule set from its JSON encoding
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the rule set as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a rule set from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Write the rule set to a JSON file
    pub fn to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
