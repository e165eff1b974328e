use error_stamp::types::CoreRef;
use error_stamp::{Code, CoreRecord, FnLookup, Lookup, Mapper, StatusCode};
use std::collections::HashMap;
use std::sync::Arc;

fn custom() -> CoreRef {
    Arc::new(CoreRecord::new(Code(100), "custom", "custom core error").with_status(StatusCode::Internal))
}

#[test]
fn existing_code_resolves_to_its_record() {
    let core = Mapper::default().lookup(Code::NOT_FOUND).unwrap();

    assert_eq!(core.code(), Code::NOT_FOUND);
    assert_eq!(core.identifier(), "not-found");
    assert_eq!(core.status_code(), Some(StatusCode::NotFound));
}

#[test]
fn absent_codes_resolve_to_unknown_record() {
    let mapper = Mapper::default();
    let unknown = mapper.lookup(Code::UNKNOWN).unwrap();

    for code in [Code(0), Code(12), Code(1000), Code(u32::MAX)] {
        let core = mapper.lookup(code).unwrap();
        assert_eq!(core.code(), unknown.code());
        assert_eq!(core.identifier(), unknown.identifier());
        assert_eq!(core.default_message(), unknown.default_message());
    }
}

#[test]
fn custom_unknown_code_is_the_fallback() {
    let mapper = Mapper::new(Code(0), HashMap::from([(Code(0), custom())]));

    assert_eq!(mapper.unknown_code(), Code(0));
    assert!(!mapper.contains(Code::INTERNAL));
    assert_eq!(mapper.lookup(Code::INTERNAL).unwrap().identifier(), "custom");
}

#[test]
fn missing_fallback_entry_yields_none() {
    let mapper = Mapper::from_records(
        Code(50),
        [CoreRecord::new(Code::NOT_FOUND, "not-found", "nothing here")],
    );

    assert!(mapper.lookup(Code::NOT_FOUND).is_some());
    assert!(mapper.lookup(Code(7)).is_none());
    assert!(Mapper::new(Code::UNKNOWN, HashMap::new()).lookup(Code::UNKNOWN).is_none());
}

#[test]
fn from_records_keeps_last_duplicate() {
    let mapper = Mapper::from_records(
        Code::UNKNOWN,
        [
            CoreRecord::new(Code::UNKNOWN, "first", "first"),
            CoreRecord::new(Code::UNKNOWN, "second", "second"),
        ],
    );

    assert_eq!(mapper.len(), 1);
    assert_eq!(mapper.lookup(Code::UNKNOWN).unwrap().identifier(), "second");
}

#[test]
fn fn_lookup_asks_for_unknown_code_after_a_miss() {
    let lookup = FnLookup::new(Code(100), |code| (code == Code(100)).then(custom));

    assert_eq!(lookup.lookup(Code(100)).unwrap().identifier(), "custom");
    assert_eq!(lookup.lookup(Code::NOT_FOUND).unwrap().code(), Code(100));
}

#[test]
fn fn_lookup_without_fallback_yields_none() {
    let lookup = FnLookup::new(Code(1), |_| None);
    assert!(lookup.lookup(Code(1)).is_none());
}

#[test]
fn shared_mapper_is_usable_across_threads() {
    let mapper = Arc::new(Mapper::default());

    let handles: Vec<_> = (0..4u32)
        .map(|i| {
            let mapper = Arc::clone(&mapper);
            std::thread::spawn(move || mapper.lookup(Code(i + 1)).map(|c| c.code()))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Some(Code(i as u32 + 1)));
    }
}
