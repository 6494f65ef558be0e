//! Query-string encoding for list-endpoint parameters.
//!
//! Each parameter struct declares its wire pairs explicitly, in field
//! declaration order. The encoder enforces the string-values-only
//! contract at runtime.

use serde_json::Value;

use crate::error::QueryError;

/// Ordered query pairs for a list-endpoint parameter struct.
pub trait QueryParams {
    /// Parameter pairs in field declaration order. A field without a
    /// wire name is simply not listed.
    fn pairs(&self) -> Vec<(&'static str, Value)>;
}

/// Encode `pairs` into a query-string fragment.
///
/// Null and empty-string values are skipped. Any other non-string value
/// aborts the whole encode with [`QueryError::NonString`]. When `escape`
/// is set, values are percent-encoded. Fragments join as `name=value`
/// with `&`; no leading `?` is emitted — callers prepend one only when
/// the fragment is non-empty.
pub fn encode(pairs: &[(&'static str, Value)], escape: bool) -> Result<String, QueryError> {
    let mut fragments = Vec::new();
    for &(name, ref value) in pairs {
        let s = match value {
            Value::Null => continue,
            Value::String(s) => s,
            _ => return Err(QueryError::NonString { field: name }),
        };
        if s.is_empty() {
            continue;
        }
        let v = if escape {
            urlencoding::encode(s).into_owned()
        } else {
            s.clone()
        };
        fragments.push(format!("{name}={v}"));
    }
    Ok(fragments.join("&"))
}

/// Encode a parameter struct with percent-escaping.
pub fn query_string<P: QueryParams>(params: &P) -> Result<String, QueryError> {
    encode(&params.pairs(), true)
}
