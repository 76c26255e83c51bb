#![no_main]
use libfuzzer_sys::fuzz_target;

use h1_request_line::{parse_line, RequestLine};

fuzz_target!(|raw: &[u8]| {
    let line = match parse_line(raw) {
        Ok(line) => line,
        Err(_) => return,
    };

    // Anything that parses must survive a trip through the wire format.
    let owned = RequestLine::new(line.method(), line.uri(), line.version()).unwrap();
    let wire = owned.to_bytes().unwrap();
    let reparsed = RequestLine::parse(&wire).unwrap();
    assert_eq!(reparsed.method(), owned.method());
    assert_eq!(reparsed.version(), owned.version());
});
