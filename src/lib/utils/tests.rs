use proptest::{
    prelude::*,
    test_runner::{Config, TestRunner},
};

use super::escape_attr;

#[test]
fn escape_attr_removes_angle_and_quotes() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&".*", |s| {
            let escaped = escape_attr(&s);
            for ch in ['<', '>', '"', '\''] {
                prop_assert!(!escaped.contains(ch));
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn escape_attr_noops_when_safe() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&"[^<>'\"&]*", |s| {
            let escaped = escape_attr(&s);
            prop_assert_eq!(escaped, s);
            Ok(())
        })
        .unwrap();
}
