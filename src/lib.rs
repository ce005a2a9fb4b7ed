pub mod assemble;
pub mod catalog;
pub mod cpu;
pub mod disasm;
pub mod encode;
pub mod error;
pub mod expand;
pub mod image;
pub mod isa;
pub mod labels;
pub mod memory;
pub mod operand;

pub use assemble::{assemble_source, Assembler, SourceLine};
pub use cpu::{Cpu, Stop, Trap};
pub use error::AsmError;
pub use memory::WordMemory;
