use super::*;

fn parse_str(input: &str) -> BcrResult<ParsedData> {
    DataParser::from_reader("test.txt", input.as_bytes()).parse()
}

fn labels(frame: &Frame) -> Vec<&str> {
    frame.bars().iter().map(Bar::label).collect()
}

#[test]
fn reads_header_and_frames() {
    let data = parse_str(
        "Sales\nUnits\nDemo Inc.\n2\n2024,Widget,x,100,Hardware\n2024,Gadget,x,300,Hardware\n",
    )
    .unwrap();

    assert_eq!(data.header.title, "Sales");
    assert_eq!(data.header.x_label, "Units");
    assert_eq!(data.header.source, "Demo Inc.");
    assert!(data.diagnostics.is_empty(), "{:?}", data.diagnostics);

    let frames = data.animation.frames();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].timestamp(), "2024");
    assert_eq!(frames[0].title(), "Sales");
    assert_eq!(labels(&frames[0]), vec!["Widget", "Gadget"]);
    assert_eq!(data.animation.palette().len(), 1);
}

#[test]
fn blank_lines_are_skipped_with_warnings() {
    let data = parse_str("\nT\n\nX\nS\n\n1\n\n2000,a,x,1,c\n").unwrap();
    assert_eq!(data.header.title, "T");
    assert_eq!(data.animation.len(), 1);
    assert_eq!(data.animation.frames()[0].len(), 1);
    assert_eq!(data.diagnostics.len(), 4);
    assert_eq!(data.diagnostics[0].context.line, 1);
}

#[test]
fn short_bar_line_at_the_end_of_a_frame() {
    let data = parse_str("T\nX\nS\n2\n2024,Widget,x,100,Hardware\n2024,Gadget\n").unwrap();
    let frames = data.animation.frames();
    assert_eq!(frames.len(), 1);
    assert_eq!(labels(&frames[0]), vec!["Widget"]);
    assert_eq!(data.diagnostics.len(), 1);
    assert_eq!(data.diagnostics[0].context.line, 6);
    assert!(data.diagnostics[0].message.contains("found 2"));
}

#[test]
fn short_bar_line_mid_frame_skips_only_that_bar() {
    // A 2-field line drops its own bar; the frame keeps reading its remaining slots.
    let data = parse_str("T\nX\nS\n3\n2024,a,x,1,c\n2024,b\n2024,c,x,3,c\n").unwrap();
    let frames = data.animation.frames();
    assert_eq!(frames.len(), 1);
    assert_eq!(labels(&frames[0]), vec!["a", "c"]);
    assert_eq!(data.diagnostics.len(), 1);
    assert_eq!(data.diagnostics[0].context.line, 6);
}

#[test]
fn invalid_utf8_in_a_label_is_replaced() {
    let input: &[u8] =
        b"Cities\nPop\nCensus\n2\n2020,S\xE3o Paulo,x,12000000,Brazil\n2020,Lima,x,10000000,Peru\n";
    let data = DataParser::from_reader("latin1.txt", input).parse().unwrap();

    let frames = data.animation.frames();
    assert_eq!(frames.len(), 1);
    assert_eq!(labels(&frames[0]), vec!["S\u{FFFD}o Paulo", "Lima"]);
    assert_eq!(frames[0].bars()[0].value(), 12_000_000);

    assert_eq!(data.diagnostics.len(), 1);
    assert_eq!(data.diagnostics[0].context, SourceContext::new("latin1.txt", 5));
    assert!(data.diagnostics[0].message.contains("UTF-8"));
}

#[test]
fn crlf_line_endings_are_stripped() {
    let data = parse_str("T\r\nX\r\nS\r\n1\r\n2024,a,x,7,c\r\n").unwrap();
    assert_eq!(data.header.source, "S");
    let bar = &data.animation.frames()[0].bars()[0];
    assert_eq!(bar.category(), "c");
    assert_eq!(bar.value(), 7);
}

#[test]
fn short_bar_line_consumes_a_slot() {
    let data = parse_str("T\nX\nS\n2\nbad,line\n2024,a,x,1,c\n1\n2025,b,x,2,c\n").unwrap();
    let frames = data.animation.frames();
    assert_eq!(frames.len(), 2);
    assert_eq!(labels(&frames[0]), vec!["a"]);
    assert_eq!(labels(&frames[1]), vec!["b"]);
}

#[test]
fn single_token_ends_frame_and_starts_the_next() {
    let data = parse_str("T\nX\nS\n3\n2024,a,x,1,c\n1\n2025,b,x,2,c\n").unwrap();
    let frames = data.animation.frames();
    assert_eq!(frames.len(), 2);
    assert_eq!(labels(&frames[0]), vec!["a"]);
    assert_eq!(labels(&frames[1]), vec!["b"]);
    assert_eq!(frames[1].timestamp(), "2025");
    assert_eq!(data.diagnostics.len(), 1);
    assert!(data.diagnostics[0].message.contains("premature end"));
}

#[test]
fn premature_end_can_leave_an_empty_frame() {
    let data = parse_str("T\nX\nS\n2\n1\n2025,b,x,2,c\n").unwrap();
    let frames = data.animation.frames();
    assert_eq!(frames.len(), 2);
    assert!(frames[0].is_empty());
    assert_eq!(frames[1].len(), 1);
}

#[test]
fn extra_fields_are_ignored() {
    let data = parse_str("T\nX\nS\n1\n2024,a,x,7,c,extra,more\n").unwrap();
    let bar = &data.animation.frames()[0].bars()[0];
    assert_eq!((bar.label(), bar.value(), bar.category()), ("a", 7, "c"));
    assert_eq!(data.diagnostics.len(), 1);
}

#[test]
fn bad_values_skip_the_bar() {
    let data = parse_str(
        "T\nX\nS\n3\n2024,a,x,lots,c\n2024,b,x,99999999999999999999,c\n2024,c,x,3,c\n",
    )
    .unwrap();
    let frame = &data.animation.frames()[0];
    assert_eq!(labels(frame), vec!["c"]);
    assert_eq!(data.diagnostics.len(), 2);
    assert!(data.diagnostics[0].message.contains("not a number"));
    assert!(data.diagnostics[1].message.contains("out of range"));
}

#[test]
fn quoted_fields_keep_commas() {
    let data = parse_str("T\nX\nS\n1\n1950,\"Tokyo, Japan\",JP,11275,East Asia\n").unwrap();
    assert_eq!(
        data.animation.frames()[0].bars()[0].label(),
        "Tokyo, Japan"
    );
}

#[test]
fn count_line_with_many_fields_skips_the_frame() {
    let data = parse_str("T\nX\nS\n2,3\n2024,a,x,1,c\n2024,b,x,2,c\n1\n2025,z,x,9,c\n").unwrap();
    let frames = data.animation.frames();
    assert_eq!(frames.len(), 1);
    assert_eq!(labels(&frames[0]), vec!["z"]);
    assert_eq!(data.diagnostics.len(), 1);
    assert_eq!(data.diagnostics[0].context.line, 4);
}

#[test]
fn unreadable_counts_are_fatal() {
    for (count, needle) in [
        ("many", "not a number"),
        ("99999999999999999999", "out of range"),
        ("0", "invalid number of bars"),
        ("-4", "invalid number of bars"),
    ] {
        let input = format!("T\nX\nS\n{count}\n2024,a,x,1,c\n");
        let err = parse_str(&input).unwrap_err();
        match err {
            BcrError::Parse { context, message } => {
                assert_eq!(context, SourceContext::new("test.txt", 4));
                assert!(message.contains(needle), "{message}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn truncated_header_is_fatal() {
    let err = parse_str("Only a title\n").unwrap_err();
    assert!(matches!(err, BcrError::Parse { .. }));
}

#[test]
fn input_ending_mid_frame_keeps_what_was_read() {
    let data = parse_str("T\nX\nS\n5\n2024,a,x,1,c\n2024,b,x,2,d\n").unwrap();
    assert_eq!(data.animation.frames()[0].len(), 2);
    assert_eq!(data.diagnostics.len(), 1);
    assert!(data.diagnostics[0].message.contains("2 of 5"));
}

#[test]
fn categories_register_across_frames() {
    let mut input = String::from("T\nX\nS\n");
    for i in 0..17 {
        input.push_str(&format!("1\n{i},bar{i},x,{},cat{i}\n", i + 1));
    }
    let data = parse_str(&input).unwrap();
    assert_eq!(data.animation.len(), 17);
    let palette = data.animation.palette();
    assert!(palette.is_overflowed());
    assert_eq!(palette.len(), 16);
}

#[test]
fn frames_use_the_configured_layout() {
    let layout = ChartLayout {
        bar_length_max: 30,
        axis_length: 40,
        n_ticks: 4,
    };
    let data = DataParser::from_reader("t", "T\nX\nS\n1\n1,a,x,1,c\n".as_bytes())
        .with_layout(layout)
        .parse()
        .unwrap();
    assert_eq!(data.animation.frames()[0].layout(), &layout);
}

#[test]
fn missing_file_is_reported() {
    let err = DataParser::from_path("definitely/not/here.txt")
        .err()
        .unwrap();
    assert!(err.to_string().contains("cannot open input file"));
}
