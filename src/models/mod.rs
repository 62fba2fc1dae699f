use serde::{Deserialize, Deserializer};

// Missing or null text fields become empty strings
pub(crate) fn deserialize_null_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

mod song;

pub use song::Song;
