#![no_main]

use i2p_datagrams::I2PAddr;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(addr) = I2PAddr::parse(s) {
            // formatting a parsed address must not panic
            let _ = addr.to_string();
        }
    }
});
