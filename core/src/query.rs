//! Query-string encoding for GET requests.
//!
//! Parameters are flattened with bracket notation (`key[0]`, `key[sub]`),
//! each key and value is url-encoded, and the joined string is then
//! url-decoded again. The GetResponse API expects the resulting literal
//! brackets (`query[name]=x`) rather than `%5B`/`%5D`.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;

use crate::request::Params;

/// Everything except `A-Za-z0-9-_.` is escaped, like classic form encoding.
const FORM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Build the query string for `params`, without the leading `?`.
///
/// `null` values are skipped, booleans become `1`/`0`, and empty arrays or
/// objects contribute nothing.
pub fn build_query(params: &Params) -> String {
    let mut pairs = Vec::new();
    for (key, value) in params {
        flatten(key.clone(), value, &mut pairs);
    }

    let encoded = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", form_encode(k), form_encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    form_decode(&encoded)
}

fn flatten(prefix: String, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => out.push((prefix, (if *b { "1" } else { "0" }).to_string())),
        Value::Number(n) => out.push((prefix, n.to_string())),
        Value::String(s) => out.push((prefix, s.clone())),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                flatten(format!("{prefix}[{i}]"), item, out);
            }
        }
        Value::Object(map) => {
            for (k, item) in map {
                flatten(format!("{prefix}[{k}]"), item, out);
            }
        }
    }
}

fn form_encode(s: &str) -> String {
    // '%' is itself escaped, so "%20" here can only come from a space.
    utf8_percent_encode(s, FORM_ENCODE_SET)
        .to_string()
        .replace("%20", "+")
}

fn form_decode(s: &str) -> String {
    let spaced = s.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn params(value: Value) -> Params {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn arrays_use_literal_brackets() {
        let query = build_query(&params(json!({"a": 1, "b": [2, 3]})));
        assert_eq!(query, "a=1&b[0]=2&b[1]=3");
        assert!(!query.contains("%5B"));
        assert!(!query.contains("%5D"));
    }

    #[test]
    fn nested_objects_use_named_brackets() {
        let query = build_query(&params(json!({
            "query": {"name": "John Doe", "campaignId": "V"},
            "perPage": 10
        })));
        assert_eq!(query, "perPage=10&query[campaignId]=V&query[name]=John Doe");
    }

    #[test]
    fn deep_nesting_flattens_every_level() {
        let query = build_query(&params(json!({"sort": {"createdOn": ["asc", "desc"]}})));
        assert_eq!(query, "sort[createdOn][0]=asc&sort[createdOn][1]=desc");
    }

    #[test]
    fn scalars_follow_form_conventions() {
        let query = build_query(&params(json!({
            "active": true,
            "archived": false,
            "skip": null,
            "ratio": 0.5
        })));
        assert_eq!(query, "active=1&archived=0&ratio=0.5");
    }

    #[test]
    fn empty_containers_emit_nothing() {
        let query = build_query(&params(json!({"fields": [], "query": {}, "page": 2})));
        assert_eq!(query, "page=2");
    }

    #[test]
    fn reserved_characters_come_back_literal() {
        let query = build_query(&params(json!({"q": "a+b", "pct": "100%", "email": "x@y.z"})));
        assert_eq!(query, "email=x@y.z&pct=100%&q=a+b");
    }

    #[test]
    fn non_ascii_survives_the_round_trip() {
        let query = build_query(&params(json!({"name": "Zoë"})));
        assert_eq!(query, "name=Zoë");
    }

    #[test]
    fn empty_params_give_empty_query() {
        assert_eq!(build_query(&Params::new()), "");
    }
}
