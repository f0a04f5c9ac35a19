// cli/constants.rs — identity strings and the verbosity-level global.
//
// A crate-level `AtomicU32` display level gated 0..4, read/written through
// plain functions, plus a `displaylevel!` macro that prints only when the
// current level clears the requested threshold.

use std::sync::atomic::{AtomicU32, Ordering};

pub const COMPRESSOR_NAME: &str = "seqpack";

/// 0 = silent; 1 = errors only; 2 = normal (default); 3 = verbose; 4 = debug.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Prints to stderr only when the current display level is at least `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
