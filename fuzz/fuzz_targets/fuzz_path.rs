#![no_main]
use kurbo::BezPath;
use libfuzzer_sys::fuzz_target;
use path_data::{parse_path, PathCommand, PathParser, PenHandler, SvgPathWriter};

fn do_path_things(d: &str) {
    let mut commands: Vec<PathCommand> = Vec::new();
    let mut parser = PathParser::new(&mut commands);
    let ok = parser.parse(d);
    assert_eq!(ok, parser.errors().is_empty());

    let mut writer = SvgPathWriter::new();
    parse_path(d, &mut writer);
    let mut reparsed: Vec<PathCommand> = Vec::new();
    assert!(parse_path(writer.as_str(), &mut reparsed));
    assert_eq!(commands.len(), reparsed.len());

    let mut path = BezPath::new();
    parse_path(d, &mut PenHandler::new(&mut path));
}

fuzz_target!(|data: &[u8]| {
    if let Ok(d) = std::str::from_utf8(data) {
        do_path_things(d);
    }
});
