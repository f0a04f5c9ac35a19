// error.rs — Error taxonomy for the compressor/decompressor: a plain
// `#[derive(Debug)]` enum with hand-written `Display` and `std::error::Error`
// impls, no `thiserror` dependency.

use std::fmt;

/// The four error kinds the pipeline can surface.
#[derive(Debug)]
pub enum SeqpackError {
    /// An underlying I/O operation failed.
    IoError(std::io::Error),
    /// A bounded internal resource (ranker heap, parse arena) would have
    /// exceeded its capacity.
    OutOfMemory,
    /// A caller-supplied argument is invalid: a path that is neither a
    /// regular file nor creatable, or a CLI arity mismatch.
    InvalidArgument(String),
    /// Decompression only: the input is not a well-formed compressed stream.
    CorruptStream(String),
}

impl fmt::Display for SeqpackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeqpackError::IoError(e) => write!(f, "I/O error: {e}"),
            SeqpackError::OutOfMemory => write!(f, "out of memory"),
            SeqpackError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            SeqpackError::CorruptStream(msg) => write!(f, "corrupt stream: {msg}"),
        }
    }
}

impl std::error::Error for SeqpackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SeqpackError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SeqpackError {
    fn from(e: std::io::Error) -> Self {
        SeqpackError::IoError(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_name_the_kind() {
        assert!(SeqpackError::OutOfMemory.to_string().contains("out of memory"));
        assert!(SeqpackError::InvalidArgument("bad path".into())
            .to_string()
            .contains("bad path"));
        assert!(SeqpackError::CorruptStream("bad header".into())
            .to_string()
            .contains("bad header"));
    }

    #[test]
    fn io_error_converts_via_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SeqpackError = io_err.into();
        assert!(matches!(err, SeqpackError::IoError(_)));
    }
}
