//! Custom request extractors.

mod parts;
mod validated_json;

pub use parts::{ApiPath, ApiQuery};
pub use validated_json::ValidatedJson;
