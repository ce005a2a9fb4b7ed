mod preprocess;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mx32::{disasm, image, Assembler};

#[derive(Parser, Debug)]
#[command(author, version, about = "MX32 assembler and disassembler", long_about = None)]
struct Opts {
    /// Source file to assemble (a word image with --disassemble)
    #[arg(value_name = "FILE")]
    input: PathBuf,
    /// Output path
    #[arg(short, long, default_value = "default.out")]
    output: PathBuf,
    /// Decode a word image back to mnemonics instead of assembling
    #[arg(short, long)]
    disassemble: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    if opts.disassemble {
        disassemble(&opts)
    } else {
        assemble(&opts)
    }
}

fn assemble(opts: &Opts) -> Result<()> {
    let lines = preprocess::expand_file(&opts.input)?;
    let words = Assembler::new().assemble(&lines)?;
    info!(words = words.len(), "assembled");
    std::fs::write(&opts.output, image::to_bytes(&words))
        .with_context(|| format!("writing {}", opts.output.display()))?;
    Ok(())
}

fn disassemble(opts: &Opts) -> Result<()> {
    let bytes = std::fs::read(&opts.input)
        .with_context(|| format!("reading {}", opts.input.display()))?;
    let words = image::from_bytes(&bytes)?;
    let text = disasm::listing(&words)?;
    std::fs::write(&opts.output, text)
        .with_context(|| format!("writing {}", opts.output.display()))?;
    Ok(())
}
