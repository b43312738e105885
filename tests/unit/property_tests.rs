//! Unit tests for own-property lookup and its fallback path

#[cfg(test)]
mod tests {
    use crate::fixtures::init_logging;
    use datashape::{PropertySource, Record, Value, get_own_property, get_own_property_from};

    /// A source whose preferred own-key check is unavailable.
    struct WithoutOwnCheck(Record);

    impl PropertySource for WithoutOwnCheck {
        fn has_own(&self, _key: &str) -> Option<bool> {
            None
        }

        fn lookup(&self, key: &str) -> Option<&Value> {
            self.0.get(key)
        }
    }

    #[test]
    fn test_returns_own_value_or_none() {
        let record = Record::new().with("foo", "bar");

        assert_eq!(get_own_property(&record, "foo"), Some(&Value::from("bar")));
        assert_eq!(get_own_property(&record, "bar"), None);
    }

    #[test]
    fn test_falls_back_when_probe_is_unavailable() {
        init_logging();
        let source = WithoutOwnCheck(Record::new().with("foo", "bar"));

        assert_eq!(
            get_own_property_from(&source, "foo"),
            Some(&Value::from("bar"))
        );
        assert_eq!(get_own_property_from(&source, "bar"), None);
    }

    #[test]
    fn test_present_null_is_distinct_from_missing() {
        let record = Record::new().with("gone", Value::Null);

        assert_eq!(get_own_property(&record, "gone"), Some(&Value::Null));
        assert_eq!(get_own_property(&record, "absent"), None);
    }

    #[test]
    fn test_lookup_does_not_descend() {
        let record = Record::new().with("outer", Record::new().with("inner", 1i64));

        assert_eq!(get_own_property(&record, "inner"), None);
        assert_eq!(get_own_property(&record, "outer.inner"), None);
    }

    #[test]
    fn test_works_through_trait_object() {
        let record = Record::new().with("k", true);
        let source: &dyn PropertySource = &record;

        assert_eq!(get_own_property_from(source, "k"), Some(&Value::Bool(true)));
    }
}
