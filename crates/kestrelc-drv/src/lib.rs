//! kestrelc-drv - Command-Line Driver
//!
//! The thin shell around [`kestrelc_par::compile`]: read one source file,
//! compile it against a fresh [`Vm`], and turn the result into a process
//! exit code. Diagnostics are reported as they're found (`Handler` never
//! unwinds, §9); the driver's only job once `compile` returns is deciding
//! whether to print a disassembly and what to exit with.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use kestrelc_objects::Vm;

/// Command-line arguments for the `kestrelc` binary.
#[derive(Parser, Debug)]
#[command(name = "kestrelc", version, about = "Compiles Kestrel source to bytecode")]
pub struct Cli {
    /// Source file to compile.
    pub input: PathBuf,

    /// Print a disassembly of the compiled script instead of just reporting success.
    #[arg(short, long)]
    pub dump: bool,
}

/// Compile `cli.input` and report the outcome.
///
/// Returns `Err` both for I/O failure (missing file, bad permissions) and
/// for a failed compile (`kestrelc_par::CompileFailed`, surfaced through
/// `anyhow`'s blanket conversion) - either way, the caller's job is just to
/// print the error and pick an exit code.
pub fn run(cli: &Cli) -> Result<()> {
    let source = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let mut vm = Vm::new();
    let script = kestrelc_par::compile(&mut vm, &source)
        .with_context(|| format!("{} failed to compile", cli.input.display()))?;

    log::info!(
        "compiled {} ({} bytes of bytecode, {} constants)",
        cli.input.display(),
        script.code.len(),
        script.constants.len()
    );

    if cli.dump {
        print!("{}", script.disassemble(&cli.input.display().to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_source(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        write!(file, "{contents}").expect("write temp file");
        file
    }

    #[test]
    fn run_succeeds_on_valid_source() {
        let file = write_source("var x = 1 + 2");
        let cli = Cli {
            input: file.path().to_path_buf(),
            dump: false,
        };
        assert!(run(&cli).is_ok());
    }

    #[test]
    fn run_fails_on_invalid_source() {
        let file = write_source("var = 1");
        let cli = Cli {
            input: file.path().to_path_buf(),
            dump: false,
        };
        assert!(run(&cli).is_err());
    }

    #[test]
    fn run_fails_on_missing_file() {
        let cli = Cli {
            input: PathBuf::from("/nonexistent/path/does-not-exist.kes"),
            dump: false,
        };
        assert!(run(&cli).is_err());
    }
}
