use serde::{Deserialize, Serialize};

/// One distinct contributor and the raw location on their profile.
///
/// Serialized with the field names used by the on-disk repo cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributorRecord {
    #[serde(rename = "login")]
    pub username: String,
    pub location: Option<String>,
}

impl ContributorRecord {
    pub fn new(username: &str, location: Option<&str>) -> Self {
        Self {
            username: username.to_lowercase(),
            location: location.map(str::to_string),
        }
    }
}

/// Which document the compositor produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// The world map alone.
    Map,
    /// The map plus a ranked list of the top countries.
    #[default]
    List,
}

impl Variant {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "map" => Some(Variant::Map),
            "list" => Some(Variant::List),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Map => "map",
            Variant::List => "list",
        }
    }
}
