//! Integration tests for sharing one module cache between threads.

mod common;

use std::thread;

use common::ModuleDir;
use numbertext::{SharedNumbertext, WideText};

#[test]
fn concurrent_first_use_loads_once() {
    let modules = ModuleDir::new().module("pl", &["5 pięć"]);
    let (numbertext, reader) = modules.numbertext();
    let shared = SharedNumbertext::from(numbertext);

    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                assert_eq!(shared.numbertext_int(5, "pl"), "pięć");
            });
        }
    });

    assert_eq!(reader.file_names(), ["pl.sor"]);
    assert_eq!(shared.loaded_languages().len(), 1);
}

#[test]
fn all_forms_are_available_through_shared_handle() {
    let modules = ModuleDir::new().module("cs", &["1 jedna"]);
    let (numbertext, _) = modules.numbertext();
    let shared = SharedNumbertext::new(numbertext);

    assert!(shared.load("cs", None));
    assert!(shared.is_loaded("cs"));

    let mut wide = WideText::from("1");
    assert!(shared.numbertext(&mut wide, "cs"));
    assert_eq!(wide, "jedna");

    let mut string = String::from("1");
    assert!(shared.numbertext_str(&mut string, "cs"));
    assert_eq!(string, "jedna");

    let mut bytes = b"1".to_vec();
    assert!(shared.numbertext_bytes(&mut bytes, "cs"));
    assert_eq!(bytes, "jedna".as_bytes());

    assert_eq!(shared.convert("1", "cs").unwrap(), "jedna");
    assert_eq!(shared.numbertext_int(2, "cs"), "2");
}

#[test]
fn failures_are_not_cached_across_threads() {
    let modules = ModuleDir::new();
    let (numbertext, reader) = modules.numbertext();
    let shared = SharedNumbertext::new(numbertext);

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert!(!shared.load("sk", None));
            });
        }
    });

    assert_eq!(reader.count(), 4);
    assert!(shared.into_inner().loaded_languages().next().is_none());
}
