//! Tests for the JSONL sink.

use logcast::{Entry, JsonSubscriber, Severity, StopSignal, Subscriber};
use std::fs;
use tempfile::TempDir;

#[test]
fn one_object_per_line_with_stripped_text() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("out.jsonl");
    let sink = JsonSubscriber::new().path(&path);

    let batch = vec![
        Entry::new(Severity::Info, "plain"),
        Entry::new(Severity::Warning, "<color fg=Yellow>hi</color> there"),
    ];
    sink.deliver(&batch, &StopSignal::new()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["severity"], "Info");
    assert_eq!(first["text"], "plain");
    // ULIDs are 26 characters, timestamps RFC 3339
    assert_eq!(first["id"].as_str().unwrap().len(), 26);
    assert!(first["ts"].as_str().unwrap().contains('T'));

    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["severity"], "Warning");
    assert_eq!(second["text"], "hi there");
}

#[test]
fn deliveries_append() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("out.jsonl");
    let sink = JsonSubscriber::new().path(&path);
    let stop = StopSignal::new();

    sink.deliver(&[Entry::new(Severity::Info, "a")], &stop).unwrap();
    sink.deliver(&[Entry::new(Severity::Info, "b")], &stop).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn missing_parent_directories_are_created() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("db").join("out.jsonl");
    let sink = JsonSubscriber::new().path(&path);

    sink.deliver(&[Entry::new(Severity::Info, "x")], &StopSignal::new())
        .unwrap();
    assert!(path.exists());
}

#[test]
fn empty_batch_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("out.jsonl");
    let sink = JsonSubscriber::new().path(&path);

    sink.deliver(&[], &StopSignal::new()).unwrap();
    assert!(!path.exists());
}
