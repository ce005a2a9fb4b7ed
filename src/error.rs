use thiserror::Error;

/// Everything the assembler and disassembler can reject. All variants are
/// fatal; the driver wraps them with the offending source line where one is
/// known.
#[derive(Debug, Error)]
pub enum AsmError {
    #[error("unknown instruction `{name}`, did you mean `{hint}`?")]
    UnknownMnemonic { name: String, hint: &'static str },

    #[error("label `{0}` is already defined")]
    DuplicateLabel(String),

    #[error("undefined label `{0}`")]
    UnknownLabel(String),

    #[error("`{text}` does not fit in {bits} bits")]
    LiteralOverflow { text: String, bits: u32 },

    #[error("cannot parse `{0}` as an integer")]
    BadLiteral(String),

    #[error("missing operand {0}")]
    MissingOperand(usize),

    #[error("malformed line")]
    MalformedLine,

    #[error("word {word:#010x}: no instruction with opcode {opcode}")]
    UnknownOpcode { word: u32, opcode: u32 },

    #[error("word {word:#010x}: no R-format instruction with funct {funct}")]
    UnknownFunct { word: u32, funct: u32 },

    #[error("binary image length {0} is not a multiple of 4")]
    TruncatedImage(usize),

    #[error("{file}:{number}: {source}\n  {text}")]
    At {
        file: String,
        number: usize,
        text: String,
        #[source]
        source: Box<AsmError>,
    },
}

impl AsmError {
    /// Attach the originating source line, unless one is already attached.
    pub fn at(self, line: &crate::assemble::SourceLine) -> AsmError {
        match self {
            AsmError::At { .. } => self,
            other => AsmError::At {
                file: line.file.clone(),
                number: line.number,
                text: line.text.trim().to_string(),
                source: Box::new(other),
            },
        }
    }
}
