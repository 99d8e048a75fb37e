//! Collaborators around the engine: CSV input and JSON output.

mod error;
mod loader;
mod writer;

pub use error::DataError;
pub use loader::{group_regions, load_competitors, load_competitors_from_path};
pub use writer::{round_file_name, write_bracket, RunManifest};
