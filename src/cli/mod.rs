// cli module — argument parsing and display-level infrastructure for the
// `seqpack` binary: compress and decompress, plus verbosity control.

pub mod args;
pub mod constants;
