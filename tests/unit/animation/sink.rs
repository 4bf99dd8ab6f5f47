use super::*;

fn cfg() -> SinkConfig {
    SinkConfig {
        fps: Fps::default(),
        frames: 3,
    }
}

#[test]
fn terminal_sink_redraws_after_the_first_frame() {
    let mut sink = TerminalSink::new(Vec::new());
    sink.begin(cfg()).unwrap();
    sink.push_frame(0, "one\n").unwrap();
    sink.push_frame(1, "two\n").unwrap();
    sink.push_frame(2, "three\n").unwrap();
    sink.end().unwrap();
    assert_eq!(sink.frames_written(), 3);

    let out = String::from_utf8(sink.into_inner()).unwrap();
    let redraw = format!("{CURSOR_RESTORE}{CLEAR_BELOW}");
    assert_eq!(
        out,
        format!("{CURSOR_SAVE}one\n{redraw}two\n{redraw}three\n")
    );
}

#[test]
fn terminal_sink_restarts_on_begin() {
    let mut sink = TerminalSink::new(Vec::new());
    sink.begin(cfg()).unwrap();
    sink.push_frame(0, "a").unwrap();
    sink.begin(cfg()).unwrap();
    assert_eq!(sink.frames_written(), 0);
}

#[test]
fn in_memory_sink_records_frames() {
    let mut sink = InMemorySink::new();
    assert!(sink.config().is_none());
    sink.begin(cfg()).unwrap();
    sink.push_frame(0, "a").unwrap();
    sink.push_frame(2, "c").unwrap();
    assert!(!sink.is_finished());
    sink.end().unwrap();

    assert_eq!(sink.config(), Some(cfg()));
    assert!(sink.is_finished());
    assert_eq!(
        sink.frames(),
        &[(0, "a".to_string()), (2, "c".to_string())]
    );
}
