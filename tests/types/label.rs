use error_stamp::labels;
use error_stamp::types::label::{
    ingest, validate_key, InvalidKey, Label, LabelMap, MissingValue, DEFAULT_MISSING_VALUE,
    MAX_KEY_LEN,
};

#[test]
fn accepts_letters_digits_underscore_hyphen() {
    let longest = "k".repeat(MAX_KEY_LEN);
    for key in ["key", "KEY_1", "request-id", "_identifier", "a", longest.as_str()] {
        assert_eq!(validate_key(key), Ok(()), "{key}");
    }
}

#[test]
fn rejects_invalid_keys() {
    assert_eq!(validate_key(""), Err(InvalidKey::Empty));
    assert_eq!(
        validate_key(&"k".repeat(70)),
        Err(InvalidKey::TooLong { len: 70 })
    );
    assert_eq!(validate_key("$key%3"), Err(InvalidKey::InvalidChar { ch: '$' }));
    assert_eq!(validate_key("has space"), Err(InvalidKey::InvalidChar { ch: ' ' }));
    assert_eq!(validate_key("dotted.key"), Err(InvalidKey::InvalidChar { ch: '.' }));
    assert_eq!(validate_key("ключ"), Err(InvalidKey::InvalidChar { ch: 'к' }));
}

#[test]
fn invalid_pair_is_dropped_without_rejecting_the_list() {
    let mut map = LabelMap::new();
    let dropped = ingest(
        &mut map,
        labels!("k".repeat(70) => "val1", "good" => "val2", "$bad" => "val3", "" => "val4"),
        &MissingValue::default(),
    );

    assert_eq!(dropped, 3);
    assert_eq!(map.len(), 1);
    assert_eq!(map["good"], "val2");
}

#[test]
fn dangling_key_gets_replacement_token() {
    let mut map = LabelMap::new();
    ingest(&mut map, labels!("key"), &MissingValue::Replace("missing".into()));

    assert_eq!(map.len(), 1);
    assert_eq!(map["key"], "missing");
}

#[test]
fn dangling_key_dropped_when_replacement_disabled() {
    let mut map = LabelMap::new();
    let dropped = ingest(&mut map, labels!("key"), &MissingValue::Drop);

    assert_eq!(dropped, 1);
    assert!(map.is_empty());
}

#[test]
fn invalid_dangling_key_is_dropped_even_with_replacement() {
    let mut map = LabelMap::new();
    let dropped = ingest(&mut map, labels!("bad key"), &MissingValue::default());

    assert_eq!(dropped, 1);
    assert!(map.is_empty());
}

#[test]
fn values_are_stringified() {
    struct Port(u16);
    impl std::fmt::Display for Port {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, ":{}", self.0)
        }
    }

    let mut map = LabelMap::new();
    ingest(
        &mut map,
        labels!("int" => 1, "bool" => true, "float" => 1.5, "port" => Port(443)),
        &MissingValue::Drop,
    );

    assert_eq!(map["int"], "1");
    assert_eq!(map["bool"], "true");
    assert_eq!(map["float"], "1.5");
    assert_eq!(map["port"], ":443");
}

#[test]
fn later_pairs_overwrite_earlier_ones() {
    let mut map = LabelMap::new();
    ingest(&mut map, labels!("k" => "first", "k" => "second"), &MissingValue::Drop);

    assert_eq!(map["k"], "second");
}

#[test]
fn tuples_convert_into_pairs() {
    let label: Label = ("attempt", 3).into();
    assert_eq!(label, Label::pair("attempt", "3"));
    assert_eq!(label.key(), "attempt");
}

#[test]
fn default_missing_value_policy_replaces() {
    assert_eq!(MissingValue::default().token(), Some(DEFAULT_MISSING_VALUE));
    assert_eq!(MissingValue::Drop.token(), None);
}

#[test]
fn invalid_key_is_a_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(InvalidKey::TooLong { len: 70 });

    assert_eq!(err.to_string(), format!("key is 70 bytes long, limit is {MAX_KEY_LEN}"));
    assert_eq!(InvalidKey::Empty.to_string(), "key is empty");
    assert_eq!(InvalidKey::InvalidChar { ch: '$' }.to_string(), "key contains invalid character '$'");
}
