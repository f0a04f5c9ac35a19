#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let compressed = match seqpack::compress(data) {
        Ok(c) => c,
        Err(_) => return,
    };
    let recovered = seqpack::decompress(&compressed)
        .expect("decompression of our own compressed output must not fail");
    assert_eq!(
        recovered, data,
        "round-trip mismatch: {} bytes in, compressed to {}, recovered {} bytes",
        data.len(),
        compressed.len(),
        recovered.len()
    );
});
