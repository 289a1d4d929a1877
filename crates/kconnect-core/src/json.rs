// ── JSON pretty-printing helpers ──
//
// Documents shown in the console are pretty-printed with sorted keys so
// repeated fetches of the same connector line up visually. Create-flow
// documents keep their insertion order (serde_json's preserve_order) so the
// template fields appear in the order an operator expects to fill them in.

use serde_json::{Map, Value};

/// Pretty-print preserving the value's own key order.
pub fn to_pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Pretty-print with object keys sorted recursively.
pub fn to_pretty_sorted(value: &Value) -> String {
    to_pretty(&sort_keys(value))
}

fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by_key(|(k, _)| k.as_str());
            let sorted: Map<String, Value> = entries
                .into_iter()
                .map(|(k, v)| (k.clone(), sort_keys(v)))
                .collect();
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn sorted_output_orders_nested_keys() {
        let value = json!({ "b": { "z": 1, "a": 2 }, "a": [ { "y": 0, "x": 0 } ] });
        let pretty = to_pretty_sorted(&value);

        let a = pretty.find("\"a\"").expect("key a");
        let b = pretty.find("\"b\"").expect("key b");
        assert!(a < b);
        let x = pretty.find("\"x\"").expect("key x");
        let y = pretty.find("\"y\"").expect("key y");
        assert!(x < y);
    }

    #[test]
    fn unsorted_output_keeps_insertion_order() {
        let value = json!({ "zeta": 1, "alpha": 2 });
        let pretty = to_pretty(&value);
        assert!(pretty.find("zeta") < pretty.find("alpha"));
    }

    #[test]
    fn sorting_is_stable_for_scalars() {
        assert_eq!(to_pretty_sorted(&json!(42)), "42");
    }
}
