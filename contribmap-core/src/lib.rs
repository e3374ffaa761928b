pub mod aggregate;
pub mod cache;
pub mod collect;
pub mod color;
pub mod country;
pub mod error;
pub mod model;
pub mod registry;
pub mod render;
pub mod resolve;
pub mod scene;
pub mod subdivision;
pub mod template;

pub use aggregate::{CountryCounts, aggregate};
pub use cache::{Cache, CacheEntry, CacheService};
pub use collect::collect_contributors;
pub use country::CountryCode;
pub use error::{CacheError, CollectError, RenderError, TemplateError};
pub use model::{ContributorRecord, Variant};
pub use render::render;
pub use resolve::resolve;
pub use template::MapTemplate;
