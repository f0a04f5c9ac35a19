// seqpack — lossless dictionary-based byte-stream compressor.
//
// Pipeline: frequency miner -> candidate ranker -> codebook builder -> DAG
// parse search -> encoder/decoder.

pub mod bitio;
pub mod cli;
pub mod codebook;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod mining;
pub mod parse;
pub mod ranker;

pub use decoder::{decompress, decompress_file};
pub use encoder::{compress, compress_file};
pub use error::SeqpackError;
