use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Word-addressed RAM. The word index is the unit of address here just as
/// it is for labels and jumps; there is no byte granularity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordMemory {
    words: Vec<u32>,
}

impl WordMemory {
    pub fn new(size: usize) -> Self {
        Self { words: vec![0; size] }
    }

    pub fn read(&self, addr: u32) -> Result<u32> {
        self.words
            .get(addr as usize)
            .copied()
            .ok_or_else(|| anyhow!("read at {addr:#x} out of bounds for {} words", self.words.len()))
    }

    pub fn write(&mut self, addr: u32, value: u32) -> Result<()> {
        let len = self.words.len();
        match self.words.get_mut(addr as usize) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(anyhow!("write at {addr:#x} out of bounds for {len} words")),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.words
    }
}
