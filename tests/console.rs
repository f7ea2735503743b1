//! Tests for the console sink's line composition.

use logcast::markup;
use logcast::{Color, ConsoleSubscriber, Entry, Severity, StopSignal, Subscriber};

#[test]
fn line_wraps_the_header_in_a_color_tag() {
    let sink = ConsoleSubscriber::new();
    let entry = Entry::new(Severity::Debug, "hello");
    let line = sink.format_entry(&entry);

    // Debug maps to green on black by default
    assert!(line.contains("[<color fg=#50fa7b bg=#000000>  Debug  </color>]"));
    assert!(line.ends_with("] hello"));
    assert!(line.starts_with('['));
}

#[test]
fn line_strips_down_to_timestamp_header_and_plain_text() {
    let sink = ConsoleSubscriber::new();
    let entry = Entry::new(Severity::Warning, "hello <color fg=Red>world</color>");
    let plain = markup::strip(&sink.format_entry(&entry));

    assert!(plain.ends_with("[ Warning ] hello world"));
}

#[test]
fn severity_color_override_changes_the_header_tag() {
    let sink = ConsoleSubscriber::new().severity_color(
        Severity::Info,
        Color::new(1, 2, 3),
        Color::black(),
    );
    let entry = Entry::new(Severity::Info, "x");
    assert!(sink.format_entry(&entry).contains("fg=#010203"));
}

#[test]
fn custom_timestamp_format_is_used() {
    let sink = ConsoleSubscriber::new().timestamp_format("%Y");
    let entry = Entry::new(Severity::Info, "x");
    let line = sink.format_entry(&entry);
    let year = entry.created().format("%Y").to_string();
    assert!(line.starts_with(&format!("[{year}]")));
}

#[test]
fn deliver_tolerates_an_empty_batch() {
    let sink = ConsoleSubscriber::new();
    sink.deliver(&[], &StopSignal::new()).unwrap();
}

#[test]
fn deliver_handles_markup_bearing_entries() {
    let sink = ConsoleSubscriber::new();
    let batch = vec![
        Entry::new(Severity::Info, "plain"),
        Entry::new(Severity::Error, "<color fg=Red>styled</color>"),
        Entry::new(Severity::Warning, "<color fg=Broken>still fine</color>"),
    ];
    sink.deliver(&batch, &StopSignal::new()).unwrap();
}

#[test]
fn deliver_without_colors_also_succeeds() {
    let sink = ConsoleSubscriber::new().colors(false);
    let batch = vec![Entry::new(Severity::Info, "<color fg=Red>x</color>")];
    sink.deliver(&batch, &StopSignal::new()).unwrap();
}
