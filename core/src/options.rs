//! Closed-set validation of loosely typed config values

use gauge_types::ClosedSet;
use serde_json::Value;

/// The member named by `current`, or `fallback` when it names none.
pub fn validated_value<T: ClosedSet>(current: Option<&Value>, fallback: T) -> T {
    validated_option(current).unwrap_or(fallback)
}

/// The member named by `current`, if any.
pub fn validated_option<T: ClosedSet>(current: Option<&Value>) -> Option<T> {
    current.and_then(Value::as_str).and_then(T::parse)
}

/// Members of an array in their original order, invalid entries dropped.
///
/// `None` when the input is not an array at all.
pub fn validate_array<T: ClosedSet>(values: Option<&Value>) -> Option<Vec<T>> {
    let items = values?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|item| item.as_str().and_then(T::parse))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauge_types::{Corner, Sorting, StateContent};
    use serde_json::json;

    #[test]
    fn value_or_fallback() {
        let valid = json!("rounded");
        let invalid = json!("wavy");
        let wrong_type = json!(3);

        assert_eq!(validated_value(Some(&valid), Corner::Square), Corner::Rounded);
        assert_eq!(validated_value(Some(&invalid), Corner::Square), Corner::Square);
        assert_eq!(validated_value(Some(&wrong_type), Corner::Square), Corner::Square);
        assert_eq!(validated_value(None, Corner::Square), Corner::Square);
    }

    #[test]
    fn option_without_fallback() {
        assert_eq!(validated_option::<Sorting>(Some(&json!("value-desc"))), Some(Sorting::ValueDesc));
        assert_eq!(validated_option::<Sorting>(Some(&json!("VALUE-DESC"))), None);
    }

    #[test]
    fn array_filters_in_order() {
        let values = json!(["state", "bogus", 7, "name", "state"]);
        assert_eq!(
            validate_array::<StateContent>(Some(&values)),
            Some(vec![StateContent::State, StateContent::Name, StateContent::State])
        );
        assert_eq!(validate_array::<StateContent>(Some(&json!([]))), Some(vec![]));
        assert_eq!(validate_array::<StateContent>(Some(&json!("name"))), None);
        assert_eq!(validate_array::<StateContent>(None), None);
    }
}
