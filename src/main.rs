//! Binary entry point for the `seqpack` command-line tool: parse args,
//! validate, dispatch to an I/O operation, translate the result to a
//! process exit code.

use std::path::Path;

use anyhow::Context;
use clap::Parser;

use seqpack::cli::args::{resolved_display_level, Cli, Command};
use seqpack::cli::constants::{set_display_level, COMPRESSOR_NAME};
use seqpack::displaylevel;
use seqpack::error::SeqpackError;
use seqpack::{compress_file, decompress_file};

/// Dispatches the parsed command, attaching the failing stage ("compress" /
/// "decompress") as `anyhow` context so the printed error names both the
/// stage and the underlying error kind.
fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Compress { input, output, force } => {
            check_overwrite(&output, force).context("compress")?;
            compress_file(&input, &output).context("compress")
        }
        Command::Decompress { input, output, force } => {
            check_overwrite(&output, force).context("decompress")?;
            decompress_file(&input, &output).context("decompress")
        }
    }
}

/// Refuses to clobber an existing output file unless `--force` was given.
fn check_overwrite(output: &Path, force: bool) -> Result<(), SeqpackError> {
    if !force && output.exists() {
        return Err(SeqpackError::InvalidArgument(format!(
            "{} already exists (use --force to overwrite)",
            output.display()
        )));
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    set_display_level(resolved_display_level(cli.verbose, cli.quiet));

    displaylevel!(3, "*** {} v{} ***\n", COMPRESSOR_NAME, env!("CARGO_PKG_VERSION"));

    match run(cli.command) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            displaylevel!(1, "seqpack: {err:#}\n");
            std::process::exit(1);
        }
    }
}
