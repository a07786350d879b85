use serde_json::json;

use super::*;

fn record(entries: &[(&str, Value<'static>)]) -> Value<'static> {
    Value::record(entries.iter().map(|(key, value)| (*key, value.clone())).collect())
}

mod truthiness {
    use super::*;

    #[test]
    fn falsy_values() {
        for value in [
            Value::Undefined,
            Value::Null,
            Value::Bool(false),
            Value::Number(0.0),
            Value::Number(-0.0),
            Value::Number(f64::NAN),
            Value::string(""),
        ] {
            assert!(!value.is_truthy(), "{value:?} should be falsy");
        }
    }

    #[test]
    fn containers_are_truthy_even_when_empty() {
        assert!(Value::list(Vec::new()).is_truthy());
        assert!(Value::record(Record::new()).is_truthy());
        assert!(Value::string("0").is_truthy());
    }
}

mod display {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn primitives() {
        assert_eq!(Value::Undefined.to_display_string(), "undefined");
        assert_eq!(Value::Null.to_display_string(), "null");
        assert_eq!(Value::Bool(true).to_display_string(), "true");
        assert_eq!(Value::Number(5.0).to_display_string(), "5");
        assert_eq!(Value::Number(2.5).to_display_string(), "2.5");
    }

    #[test]
    fn containers() {
        let list = Value::list(vec![1.0.into(), Value::Null, "x".into()]);
        assert_eq!(list.to_display_string(), "1,,x");
        assert_eq!(record(&[("a", 1.0.into())]).to_display_string(), "[object Object]");
    }
}

mod equality {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn records_ignore_key_order() {
        let ab = record(&[("a", 1.0.into()), ("b", 2.0.into())]);
        let ba = record(&[("b", 2.0.into()), ("a", 1.0.into())]);
        assert_eq!(ab, ba);
        assert_ne!(ab, record(&[("a", 1.0.into())]));
    }

    #[test]
    fn lists_compare_elementwise() {
        let a = Value::list(vec![1.0.into(), "x".into()]);
        assert_eq!(a, Value::list(vec![1.0.into(), "x".into()]));
        assert_ne!(a, Value::list(vec!["x".into(), 1.0.into()]));
    }

    #[test]
    fn nan_is_not_equal_to_itself() {
        assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
    }
}

mod records {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn duplicate_key_keeps_first_position() {
        let mut record = Record::new();
        record.insert("a".into(), 1.0.into());
        record.insert("b".into(), 2.0.into());
        record.insert("a".into(), 3.0.into());

        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(record.get("a"), Some(&Value::Number(3.0)));
    }

    #[test]
    fn merge_overwrites_in_place() {
        let mut base: Record<'_> = [("a", Value::Number(1.0)), ("b", Value::Number(2.0))]
            .into_iter()
            .collect();
        let patch: Record<'_> = [("b", Value::Number(20.0)), ("c", Value::Number(30.0))]
            .into_iter()
            .collect();
        base.merge(&patch);

        assert_eq!(base.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(base.get("b"), Some(&Value::Number(20.0)));
    }
}

mod json_conversion {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn integral_numbers_become_integers() {
        assert_eq!(Value::Number(5.0).to_json(), json!(5));
        assert_eq!(Value::Number(-0.0).to_json(), json!(0));
        assert_eq!(Value::Number(1.5).to_json(), json!(1.5));
        assert_eq!(Value::Number(f64::INFINITY).to_json(), json!(null));
    }

    #[test]
    fn undefined_is_dropped_from_records_and_null_in_lists() {
        let value = record(&[
            ("kept", "x".into()),
            ("missing", Value::Undefined),
            ("items", Value::list(vec![Value::Undefined, true.into()])),
        ]);
        assert_eq!(value.to_json(), json!({"kept": "x", "items": [null, true]}));
        assert_eq!(Value::Undefined.to_json(), json!(null));
    }

    #[test]
    fn record_order_is_preserved() {
        let value = record(&[("z", 1.0.into()), ("a", 2.0.into())]);
        let json = value.to_json();
        let keys: Vec<_> = json.as_object().map(|map| map.keys().cloned().collect()).unwrap_or_default();
        assert_eq!(keys, vec!["z".to_string(), "a".to_string()]);
    }
}
