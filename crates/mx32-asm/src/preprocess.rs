//! Text-level preprocessing, done before any parsing: `;` comment stripping
//! and recursive `#include` splicing.

use std::path::{Path, PathBuf};

use thiserror::Error;

use mx32::SourceLine;

#[derive(Debug, Error)]
pub enum PreprocessError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{file}:{line}: malformed include directive")]
    MalformedInclude { file: String, line: usize },
    #[error("include cycle: {path} is already being included")]
    IncludeCycle { path: PathBuf },
}

/// Expand `path` into the flat line sequence the assembler consumes.
/// Includes splice depth-first, resolved relative to the including file's
/// directory; a file including itself, directly or through a chain, is a
/// fatal error.
pub fn expand_file(path: &Path) -> Result<Vec<SourceLine>, PreprocessError> {
    let mut out = Vec::new();
    let mut stack = Vec::new();
    include(path, &mut out, &mut stack)?;
    Ok(out)
}

fn include(
    path: &Path,
    out: &mut Vec<SourceLine>,
    stack: &mut Vec<PathBuf>,
) -> Result<(), PreprocessError> {
    let canon = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    if stack.contains(&canon) {
        return Err(PreprocessError::IncludeCycle { path: canon });
    }
    let text = std::fs::read_to_string(path).map_err(|source| PreprocessError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    stack.push(canon);

    let file = path.display().to_string();
    for (idx, raw) in text.lines().enumerate() {
        let line = strip_comment(raw);
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix("#include") {
            if rest.starts_with(char::is_whitespace) {
                let target = rest.trim().trim_matches('"');
                let resolved = match path.parent() {
                    Some(dir) => dir.join(target),
                    None => PathBuf::from(target),
                };
                include(&resolved, out, stack)?;
                continue;
            }
            // A bare `#include`, or one glued to a non-identifier character
            // like `#include"x"`, is a broken directive. `#includexyz` is
            // some other token; the assembler rejects it.
            let glued_word = rest.starts_with(|c: char| c.is_ascii_alphanumeric() || c == '_');
            if !glued_word {
                return Err(PreprocessError::MalformedInclude {
                    file: file.clone(),
                    line: idx + 1,
                });
            }
        }
        out.push(SourceLine::new(file.clone(), idx + 1, line));
    }

    stack.pop();
    Ok(())
}

/// Everything from the first `;` to end of line is comment.
fn strip_comment(line: &str) -> &str {
    match line.find(';') {
        Some(pos) => &line[..pos],
        None => line,
    }
}
