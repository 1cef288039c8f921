use serde::de::DeserializeOwned;
use tracing::debug;

/// Decode a model response as JSON, substituting a fallback on failure.
///
/// Every prompted stage asks the model for a single JSON object, but
/// nothing enforces that on the wire: the model may wrap the object in
/// markdown fences or surround it with prose. This strips those
/// wrappers, then attempts a strict decode. Any failure (malformed
/// JSON, wrong types, unknown enum values) yields the stage's fixed
/// fallback record instead of an error.
///
/// Deterministic: the same raw response always produces the same value.
pub fn decode_or_fallback<T, F>(raw: &str, fallback: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match serde_json::from_str(extract_json_object(raw)) {
        Ok(value) => value,
        Err(e) => {
            debug!("Response decode failed, using fallback: {}", e);
            fallback()
        }
    }
}

/// Trim markdown code fences and surrounding prose down to the
/// outermost `{...}` span, if one exists
fn extract_json_object(raw: &str) -> &str {
    let trimmed = raw.trim();

    let inner = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|s| s.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed);

    match (inner.find('{'), inner.rfind('}')) {
        (Some(start), Some(end)) if start < end => &inner[start..=end],
        _ => inner,
    }
}
