use serde::{Deserialize, Serialize};

/// One entry of the paginated `/repos/{repo}/contributors` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub login: String,
    #[serde(default)]
    pub contributions: u64,
}

/// The subset of `/users/{login}` the heatmap needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub login: String,
    #[serde(default)]
    pub location: Option<String>,
}

impl Contributor {
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            contributions: 0,
        }
    }

    /// Logins are case-insensitive on GitHub; caches key on the lowercase form.
    pub fn normalized_login(&self) -> String {
        self.login.to_lowercase()
    }
}
