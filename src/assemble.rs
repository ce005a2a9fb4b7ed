//! The assembly driver: one emission pass over preprocessed lines, then a
//! patch pass that rewrites placeholder triples recorded for forward
//! references.

use tracing::debug;

use crate::catalog::{self, Format};
use crate::encode;
use crate::error::AsmError;
use crate::expand;
use crate::labels::{FixupTable, LabelTable};

/// One preprocessed input line with its origin for diagnostics.
#[derive(Debug, Clone)]
pub struct SourceLine {
    pub file: String,
    /// 1-based line number within `file`.
    pub number: usize,
    pub text: String,
}

impl SourceLine {
    pub fn new(file: impl Into<String>, number: usize, text: impl Into<String>) -> Self {
        Self { file: file.into(), number, text: text.into() }
    }
}

/// Run-scoped assembler state. The output vector doubles as the emission
/// cursor: the next word index is always its length.
#[derive(Debug, Default)]
pub struct Assembler {
    words: Vec<u32>,
    labels: LabelTable,
    fixups: FixupTable,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble preprocessed lines into the final word stream.
    pub fn assemble(mut self, lines: &[SourceLine]) -> Result<Vec<u32>, AsmError> {
        for line in lines {
            self.line(line).map_err(|e| e.at(line))?;
        }
        self.patch()?;
        Ok(self.words)
    }

    fn cursor(&self) -> u32 {
        self.words.len() as u32
    }

    fn line(&mut self, line: &SourceLine) -> Result<(), AsmError> {
        let text = line.text.trim();
        if text.is_empty() {
            return Ok(());
        }

        // A label line is exactly `name:`; it emits nothing and binds to the
        // index of whatever word comes next.
        if let Some(name) = text.strip_suffix(':') {
            let name = name.trim();
            if name.is_empty() || name.contains(char::is_whitespace) {
                return Err(AsmError::MalformedLine);
            }
            debug!(label = name, index = self.cursor(), "bind");
            return self.labels.bind(name, self.cursor());
        }

        let (op, rest) = match text.split_once(char::is_whitespace) {
            Some((op, rest)) => (op, rest.trim()),
            None => (text, ""),
        };
        let args: Vec<&str> = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split(',').map(str::trim).collect()
        };

        let entry = catalog::by_name(op).ok_or_else(|| AsmError::UnknownMnemonic {
            name: op.to_string(),
            hint: catalog::nearest(op),
        })?;

        match entry.format {
            Format::Macro => {
                let words = expand::expand(
                    entry.name,
                    &args,
                    self.cursor(),
                    &self.labels,
                    &mut self.fixups,
                    line,
                )?;
                self.words.extend(words);
            }
            _ => {
                self.words.push(encode::instruction(entry, &args)?);
            }
        }
        Ok(())
    }

    /// Rewrite every recorded placeholder triple now that all labels are
    /// bound.
    fn patch(&mut self) -> Result<(), AsmError> {
        for (index, fixup) in self.fixups.drain() {
            let addr = self
                .labels
                .lookup(&fixup.label)
                .ok_or_else(|| AsmError::UnknownLabel(fixup.label.clone()).at(&fixup.origin))?;
            debug!(index, label = %fixup.label, addr, "patch");
            let start = index as usize;
            self.words[start..start + 3].copy_from_slice(&expand::jl_words(addr));
        }
        Ok(())
    }
}

/// Convenience for sources that arrive as one in-memory string, with no
/// preprocessing.
pub fn assemble_source(source: &str) -> Result<Vec<u32>, AsmError> {
    let lines: Vec<SourceLine> = source
        .lines()
        .enumerate()
        .map(|(idx, text)| SourceLine::new("<input>", idx + 1, text))
        .collect();
    Assembler::new().assemble(&lines)
}
