//! Query string decoding.

use std::collections::HashMap;

/// Decode a raw query string into a key/value map.
///
/// Keys and values are percent- and `+`-decoded. When a key repeats, the
/// first occurrence wins.
pub fn parse_query(raw: Option<&str>) -> HashMap<String, String> {
    let mut params = HashMap::new();

    if let Some(raw) = raw {
        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            params
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }
    }

    params
}
