use serde::{Deserialize, Deserializer, Serialize};

use super::deserialize_null_default;

/// A single search hit as returned by the backend `/search` endpoint.
#[derive(Deserialize, Serialize, Clone, PartialEq, Eq, Debug)]
pub struct Song {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub artist: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub album: String,
}

impl Song {
    pub fn new(id: &str, title: &str, artist: &str, album: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            artist: artist.to_string(),
            album: album.to_string(),
        }
    }
}

// The backend serialises track ids as numbers, other producers as strings
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
