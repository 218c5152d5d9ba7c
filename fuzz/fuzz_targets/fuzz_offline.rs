#![no_main]

use i2p_datagrams::OfflineSignature;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz offline signature decoding - test for panics and out-of-bounds
    // reads; exercise every signature type as the destination context
    for dest_sig_type in [0u16, 1, 2, 3, 7, 11, 255] {
        let _ = OfflineSignature::from_bytes(data, dest_sig_type);
    }
});
