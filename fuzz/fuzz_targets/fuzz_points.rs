#![no_main]
use libfuzzer_sys::fuzz_target;
use path_data::{Point, PointsParser};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let mut points: Vec<Point> = Vec::new();
        let mut parser = PointsParser::new(&mut points);
        let ok = parser.parse(text);
        // the points grammar stops at its first error
        assert!(parser.errors().len() <= 1);
        assert_eq!(ok, parser.errors().is_empty());
    }
});
