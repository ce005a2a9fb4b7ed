use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use mx32::{image, Cpu, WordMemory};

#[derive(Parser, Debug)]
#[command(author, version, about = "Run an MX32 word image on the interpreter")]
struct Opts {
    /// Word image produced by mx32-asm
    #[arg(value_name = "IMAGE")]
    input: PathBuf,
    /// Entry point, as a word index
    #[arg(short, long, default_value_t = 0)]
    entry: u32,
    /// RAM size in words
    #[arg(short, long, default_value_t = 65536)]
    ram: usize,
    /// Stop after this many steps even without a halt loop
    #[arg(long, default_value_t = 10_000_000)]
    steps: u64,
    /// Print the final cpu state as JSON
    #[arg(long)]
    dump_state: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let bytes = std::fs::read(&opts.input)
        .with_context(|| format!("reading {}", opts.input.display()))?;
    let rom = image::from_bytes(&bytes)?;

    let mut ram = WordMemory::new(opts.ram);
    let mut cpu = Cpu::new(opts.entry);

    // The halt macro spins on its own last word, so a pc that stops moving
    // means the program is done; a trap is a failing exit.
    let outcome = cpu.run(&rom, &mut ram, opts.steps);

    if opts.dump_state {
        println!("{}", serde_json::to_string_pretty(&cpu)?);
    }
    let stop = outcome?;
    tracing::debug!(?stop, pc = cpu.pc, "stopped");
    Ok(())
}
