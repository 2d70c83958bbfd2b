#![no_main]

use libfuzzer_sys::fuzz_target;

use arenavec_ip::Ipv4Address;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Should not panic; anything accepted must survive a display round trip.
    if let Ok(addr) = text.parse::<Ipv4Address>() {
        let again: Ipv4Address = addr.to_string().parse().unwrap();
        assert_eq!(again, addr);
    }
});
