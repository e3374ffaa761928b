pub mod error;
pub mod github;
pub mod result;

pub use error::SourceError;
pub use github::{ContributorSource, GitHubClient};
pub use result::{Contributor, UserProfile};
