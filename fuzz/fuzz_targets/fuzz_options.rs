#![no_main]

use i2p_datagrams::Options;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz mapping decoding - a successful decode must re-encode without
    // error and consume exactly its declared block
    if let Ok((opts, consumed)) = Options::from_bytes(data) {
        assert!(consumed <= data.len());
        let reencoded = opts.to_bytes().expect("decoded mapping must re-encode");
        assert!(reencoded.len() <= consumed);
    }
});
