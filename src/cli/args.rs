//! Command-line surface for the `seqpack` binary: `compress` and
//! `decompress`, each taking an input and an output path.
//!
//! A `clap::Parser`/`Subcommand` derive, the idiomatic fit for a small,
//! fixed verb set.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "seqpack", about = "Lossless dictionary-based byte-stream compressor", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity (repeatable: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compress a file into the seqpack format.
    Compress {
        /// Source file to read.
        input: PathBuf,
        /// Destination file to write.
        output: PathBuf,
        /// Overwrite `output` if it already exists.
        #[arg(short, long)]
        force: bool,
    },
    /// Decompress a seqpack file back to its original bytes.
    Decompress {
        /// Source file to read.
        input: PathBuf,
        /// Destination file to write.
        output: PathBuf,
        /// Overwrite `output` if it already exists.
        #[arg(short, long)]
        force: bool,
    },
}

/// Resolves the `-v`/`-q` flags to the `cli::constants` display level: 2 is
/// the default "normal" level, each `-v` raises it (capped at 4), `-q` forces
/// it to 0.
pub fn resolved_display_level(verbose: u8, quiet: bool) -> u32 {
    if quiet {
        0
    } else {
        (2 + verbose as u32).min(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_compress_invocation() {
        let cli = Cli::parse_from(["seqpack", "compress", "in.bin", "out.sp"]);
        match cli.command {
            Command::Compress { input, output, force } => {
                assert_eq!(input, PathBuf::from("in.bin"));
                assert_eq!(output, PathBuf::from("out.sp"));
                assert!(!force);
            }
            _ => panic!("expected Compress"),
        }
    }

    #[test]
    fn parses_decompress_with_force_flag() {
        let cli = Cli::parse_from(["seqpack", "decompress", "-f", "a.sp", "b.bin"]);
        match cli.command {
            Command::Decompress { force, .. } => assert!(force),
            _ => panic!("expected Decompress"),
        }
    }

    #[test]
    fn verbosity_and_quiet_resolve_as_expected() {
        assert_eq!(resolved_display_level(0, false), 2);
        assert_eq!(resolved_display_level(1, false), 3);
        assert_eq!(resolved_display_level(5, false), 4);
        assert_eq!(resolved_display_level(3, true), 0);
    }
}
