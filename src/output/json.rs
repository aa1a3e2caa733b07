// file: src/output/json.rs
// description: json rendering of search and QA results
// reference: https://docs.rs/serde_json

use crate::error::{Result, RetrieverError};
use serde::Serialize;

pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    rendered.map_err(|e| RetrieverError::Serialization(e.to_string()))
}
