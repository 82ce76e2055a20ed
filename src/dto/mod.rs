pub mod api;
pub mod main;

/// Lenient deserializers for request parameters: malformed values fall back
/// to defaults instead of failing the request.
pub(crate) mod de {
    use serde::{Deserialize, Deserializer};

    pub fn lenient_usize<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.and_then(|value| value.trim().parse().ok()))
    }

    pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .map(|value| {
                let value = value.trim().to_ascii_lowercase();
                value == "1" || value == "true"
            })
            .unwrap_or(false))
    }
}
