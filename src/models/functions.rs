// 3rd party crates
use serde::{Deserialize, Deserializer};

/// Returns the last path segment of a resource URL.
pub fn resource_base_name(url: &str) -> &str {
    url.trim_end_matches('/').rsplit('/').next().unwrap_or(url)
}

/// Target ids are 64-bit and the API sends them as decimal strings.
pub(super) fn deserialize_target_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(0),
        Some(RawId::Number(id)) => Ok(id),
        Some(RawId::Text(text)) if text.is_empty() => Ok(0),
        Some(RawId::Text(text)) => text.parse().map_err(serde::de::Error::custom),
    }
}
