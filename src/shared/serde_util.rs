//! Custom serde helpers for host-page wire formats.

/// Deserializes a flag the host page may inject as a JSON bool or as the
/// string `"true"`. Anything else reads as `false`.
pub mod bool_or_string {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Str(String),
        Other(serde_json::Value),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Bool(b) => b,
            Raw::Str(s) => s == "true",
            Raw::Other(_) => false,
        })
    }
}

/// Same as [`bool_or_string`], for optional fields.
pub mod opt_bool_or_string {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wrap(#[serde(deserialize_with = "super::bool_or_string::deserialize")] bool);

        Ok(Option::<Wrap>::deserialize(deserializer)?.map(|Wrap(b)| b))
    }
}
