use anyhow::Error;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::isa::{self, funct, opcode, reg};
use crate::memory::WordMemory;

#[derive(thiserror::Error, Debug)]
pub enum Trap {
    #[error("invalid instruction {word:#010x} at {pc}")]
    InvalidInstruction { pc: u32, word: u32 },
    #[error("unsupported sub-word memory access {word:#010x} at {pc}")]
    Unsupported { pc: u32, word: u32 },
    #[error("memory fault at {addr:#x}: {source}")]
    Bus { addr: u32, #[source] source: Error },
    #[error("program counter {pc} outside the rom")]
    PcOutOfRange { pc: u32 },
}

/// Why a bounded run stopped, when it did not trap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    /// The pc stopped moving: the halt macro's self-jump, normal
    /// termination.
    Halted,
    /// The step cap ran out first.
    StepLimit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cpu {
    pub pc: u32,
    pub regs: [u32; isa::reg::COUNT],
}

impl Cpu {
    pub fn new(entry: u32) -> Self {
        Self { pc: entry, regs: [0; isa::reg::COUNT] }
    }

    /// Slot 0 is hardwired zero: reads yield 0, writes vanish.
    fn reg(&self, index: u32) -> u32 {
        if index == reg::ZERO {
            0
        } else {
            self.regs[index as usize]
        }
    }

    fn set_reg(&mut self, index: u32, value: u32) {
        if index != reg::ZERO {
            self.regs[index as usize] = value;
        }
    }

    /// Step until the pc stops moving or `steps` run out. Traps propagate;
    /// they are failures, not termination.
    pub fn run(&mut self, rom: &[u32], ram: &mut WordMemory, steps: u64) -> Result<Stop, Trap> {
        for _ in 0..steps {
            let before = self.pc;
            self.step(rom, ram)?;
            if self.pc == before {
                return Ok(Stop::Halted);
            }
        }
        Ok(Stop::StepLimit)
    }

    /// Execute the word at pc. Control flow moves pc itself; everything else
    /// falls through to pc + 1.
    pub fn step(&mut self, rom: &[u32], ram: &mut WordMemory) -> Result<(), Trap> {
        let pc = self.pc;
        let word = *rom.get(pc as usize).ok_or(Trap::PcOutOfRange { pc })?;
        let next = pc.wrapping_add(1);
        let op = isa::opcode_of(word);
        trace!(pc, word = format_args!("{word:#010x}"), op, "step");

        match op {
            opcode::RTYPE => {
                let a = self.reg(isa::rs_of(word));
                let b = self.reg(isa::rt_of(word));
                let value = match isa::funct_of(word) {
                    funct::ADD => a.wrapping_add(b),
                    funct::SUB => a.wrapping_sub(b),
                    funct::AND => a & b,
                    funct::OR => a | b,
                    funct::XOR => a ^ b,
                    funct::SHL => a.wrapping_shl(b),
                    funct::SAL => ((a as i32).wrapping_shl(b)) as u32,
                    funct::SHR => a.wrapping_shr(b),
                    funct::SAR => ((a as i32).wrapping_shr(b)) as u32,
                    funct::NOT => !a,
                    funct::LTS => ((a as i32) < (b as i32)) as u32,
                    funct::GTS => ((a as i32) > (b as i32)) as u32,
                    funct::LTU => (a < b) as u32,
                    funct::GTU => (a > b) as u32,
                    funct::EQ => (a == b) as u32,
                    funct::NE => (a != b) as u32,
                    _ => return Err(Trap::InvalidInstruction { pc, word }),
                };
                self.set_reg(isa::rd_of(word), value);
                self.pc = next;
            }
            opcode::LHI => {
                let rt = isa::rt_of(word);
                let value = (self.reg(rt) & 0xFFFF) | (isa::imm16_of(word) << 16);
                self.set_reg(rt, value);
                self.pc = next;
            }
            opcode::LLO => {
                let rt = isa::rt_of(word);
                let value = (self.reg(rt) & 0xFFFF_0000) | isa::imm16_of(word);
                self.set_reg(rt, value);
                self.pc = next;
            }
            opcode::LW => {
                let addr = self
                    .reg(isa::rs_of(word))
                    .wrapping_add_signed(isa::sign_ext(isa::imm16_of(word), 16) as i32);
                let value = ram.read(addr).map_err(|source| Trap::Bus { addr, source })?;
                self.set_reg(isa::rt_of(word), value);
                self.pc = next;
            }
            opcode::SW => {
                let addr = self
                    .reg(isa::rs_of(word))
                    .wrapping_add_signed(isa::sign_ext(isa::imm16_of(word), 16) as i32);
                ram.write(addr, self.reg(isa::rt_of(word)))
                    .map_err(|source| Trap::Bus { addr, source })?;
                self.pc = next;
            }
            opcode::BR => {
                if self.reg(isa::rs_of(word)) != 0 {
                    let offset = isa::sign_ext(isa::imm16_of(word), 16) as i32;
                    self.pc = next.wrapping_add_signed(offset);
                } else {
                    self.pc = next;
                }
            }
            opcode::JR => {
                self.pc = self.reg(isa::rs_of(word));
            }
            opcode::JMP => {
                self.pc = isa::addr26_of(word);
            }
            opcode::NOOP => {
                self.pc = next;
            }
            // RAM is word-granular; the byte and halfword encodings exist in
            // the catalog but have no execution semantics.
            opcode::LB | opcode::LBU | opcode::LH | opcode::LHU | opcode::LWU | opcode::SB
            | opcode::SH => {
                return Err(Trap::Unsupported { pc, word });
            }
            _ => return Err(Trap::InvalidInstruction { pc, word }),
        }
        Ok(())
    }
}
