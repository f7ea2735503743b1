//! Tests for the severity flag set and mask filtering.

use logcast::severity::HEADER_WIDTH;
use logcast::{Severity, SeverityMask};

#[test]
fn flags_are_distinct_powers_of_two() {
    let all = Severity::all();
    for severity in all {
        assert_eq!(severity.bits().count_ones(), 1, "{severity} not a power of two");
    }

    let mut combined = 0u8;
    for severity in all {
        assert_eq!(combined & severity.bits(), 0, "{severity} overlaps another flag");
        combined |= severity.bits();
    }
    assert_eq!(combined, SeverityMask::ALL.bits());
}

#[test]
fn mask_contains_is_bitwise_intersection() {
    let mask = Severity::Debug | Severity::Error;
    assert!(mask.contains(Severity::Debug));
    assert!(mask.contains(Severity::Error));
    assert!(!mask.contains(Severity::Info));
    assert!(!mask.contains(Severity::Fatal));
}

#[test]
fn mask_none_rejects_everything() {
    for severity in Severity::all() {
        assert!(!SeverityMask::NONE.contains(severity));
    }
    assert!(SeverityMask::NONE.is_empty());
}

#[test]
fn mask_all_accepts_everything() {
    for severity in Severity::all() {
        assert!(SeverityMask::ALL.contains(severity));
    }
}

#[test]
fn mask_with_and_without() {
    let mask = SeverityMask::NONE.with(Severity::Warning);
    assert!(mask.contains(Severity::Warning));
    assert!(mask.without(Severity::Warning).is_empty());
}

#[test]
fn mask_from_single_severity() {
    let mask = SeverityMask::from(Severity::Fatal);
    assert!(mask.contains(Severity::Fatal));
    assert_eq!(mask.bits(), Severity::Fatal.bits());
}

#[test]
fn mask_bitor_assign() {
    let mut mask = SeverityMask::NONE;
    mask |= Severity::Info;
    mask |= Severity::Debug | Severity::Fatal;
    assert!(mask.contains(Severity::Info));
    assert!(mask.contains(Severity::Debug));
    assert!(mask.contains(Severity::Fatal));
    assert!(!mask.contains(Severity::Error));
}

#[test]
fn longest_name_has_zero_padding() {
    assert_eq!(Severity::Exception.header(), "Exception");
}

#[test]
fn headers_share_one_width() {
    for severity in Severity::all() {
        assert_eq!(severity.header().chars().count(), HEADER_WIDTH, "{severity}");
    }
}

#[test]
fn header_centering_sits_left_of_center_on_odd_padding() {
    // "Info" in a 9-wide field leaves 5 spaces: 2 left, 3 right
    assert_eq!(Severity::Info.header(), "  Info   ");
    assert_eq!(Severity::Warning.header(), " Warning ");
    assert_eq!(Severity::Debug.header(), "  Debug  ");
}

#[test]
fn parse_accepts_names_and_aliases() {
    assert_eq!("debug".parse::<Severity>().unwrap(), Severity::Debug);
    assert_eq!("Info".parse::<Severity>().unwrap(), Severity::Info);
    assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warning);
    assert_eq!("WARN".parse::<Severity>().unwrap(), Severity::Warning);
    assert_eq!("err".parse::<Severity>().unwrap(), Severity::Error);
    assert_eq!("exception".parse::<Severity>().unwrap(), Severity::Exception);
    assert_eq!("fatal".parse::<Severity>().unwrap(), Severity::Fatal);
}

#[test]
fn parse_rejects_unknown_names() {
    let err = "critical".parse::<Severity>().unwrap_err();
    assert!(err.to_string().contains("critical"));
}

#[test]
fn display_uses_the_name() {
    assert_eq!(Severity::Fatal.to_string(), "Fatal");
    assert_eq!(Severity::Warning.to_string(), "Warning");
}
