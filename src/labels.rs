//! Label bindings and unresolved forward references.

use std::collections::{BTreeMap, HashMap};

use crate::assemble::SourceLine;
use crate::error::AsmError;

/// Bind-once map from label name to the word index of the next emitted word.
#[derive(Debug, Default)]
pub struct LabelTable {
    bound: HashMap<String, u32>,
}

impl LabelTable {
    pub fn bind(&mut self, name: &str, index: u32) -> Result<(), AsmError> {
        if self.bound.contains_key(name) {
            return Err(AsmError::DuplicateLabel(name.to_string()));
        }
        self.bound.insert(name.to_string(), index);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<u32> {
        self.bound.get(name).copied()
    }
}

/// A placeholder triple waiting for its label. `origin` is the line the
/// reference came from, for the undefined-label diagnostic.
#[derive(Debug)]
pub struct Fixup {
    pub label: String,
    pub origin: SourceLine,
}

/// Pending fixups keyed by the index of the first placeholder word. BTreeMap
/// keeps the patch pass in emission order.
#[derive(Debug, Default)]
pub struct FixupTable {
    pending: BTreeMap<u32, Fixup>,
}

impl FixupTable {
    pub fn record(&mut self, index: u32, label: &str, origin: &SourceLine) {
        self.pending.insert(
            index,
            Fixup { label: label.to_string(), origin: origin.clone() },
        );
    }

    pub fn drain(&mut self) -> Vec<(u32, Fixup)> {
        std::mem::take(&mut self.pending).into_iter().collect()
    }
}
