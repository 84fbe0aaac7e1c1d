//! Id-addressed attack pattern registry
//!
//! Boss definitions reference choreography by number instead of embedding
//! scripts. The registry resolves those numbers to built-in sequences and
//! absorbs bad ids: an unknown id logs a warning and resolves to the idle
//! fallback, so a misconfigured boss idles instead of crashing.

pub mod builtin;

use std::fmt;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::sequence::AttackSequence;

/// Identifier for a built-in attack pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternId(pub u16);

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lookup table from pattern id to sequence.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    patterns: HashMap<PatternId, AttackSequence>,
    fallback: AttackSequence,
}

impl PatternRegistry {
    /// Registry preloaded with the built-in pattern table.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        for (id, sequence) in builtin::all() {
            registry.register(id, sequence);
        }
        registry
    }

    /// Registry containing only the fallback. Useful for tests and for
    /// skins that install their own table from scratch.
    pub fn empty() -> Self {
        Self {
            patterns: HashMap::new(),
            fallback: builtin::idle_fallback(),
        }
    }

    /// Add or replace a pattern.
    pub fn register(&mut self, id: PatternId, sequence: AttackSequence) {
        self.patterns.insert(id, sequence);
    }

    /// Resolve an id, handing back the fallback for unknown ids.
    pub fn lookup(&self, id: PatternId) -> &AttackSequence {
        match self.patterns.get(&id) {
            Some(sequence) => sequence,
            None => {
                tracing::warn!(pattern = id.0, "unknown pattern id, using idle fallback");
                &self.fallback
            }
        }
    }

    /// The sequence handed out for unknown ids.
    pub fn fallback(&self) -> &AttackSequence {
        &self.fallback
    }

    pub fn contains(&self, id: PatternId) -> bool {
        self.patterns.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
