//! Production rules: symbol -> replacement

use serde::Serialize;
use std::collections::BTreeMap;

/// Production rules of an L-system.
///
/// A symbol without a rule is a terminal and is copied through unchanged
/// when rewriting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Grammar {
    rules: BTreeMap<char, String>,
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style rule insertion. A later rule for the same symbol wins.
    pub fn with_rule(mut self, symbol: char, replacement: impl Into<String>) -> Self {
        self.rules.insert(symbol, replacement.into());
        self
    }

    /// Replacement for `symbol`, if it has a rule
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.rules.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.rules.iter().map(|(&c, r)| (c, r.as_str()))
    }
}

impl<S: Into<String>> FromIterator<(char, S)> for Grammar {
    fn from_iter<I: IntoIterator<Item = (char, S)>>(iter: I) -> Self {
        Grammar {
            rules: iter.into_iter().map(|(c, r)| (c, r.into())).collect(),
        }
    }
}
