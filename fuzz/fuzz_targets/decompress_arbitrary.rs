#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes through the decompressor. An `Err` is expected and
    // fine (most random byte strings are not valid seqpack streams) — what
    // this target verifies is the absence of panics, infinite loops, or
    // fabricated output longer than what a compressed stream that small
    // could plausibly expand to.
    let _ = seqpack::decompress(data);
});
