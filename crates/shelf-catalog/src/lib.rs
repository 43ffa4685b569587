pub mod error;
pub mod payload;
pub mod source;

pub use error::{CatalogError, Result};
pub use payload::{ImageLinks, SearchInfo, VolumeInfo, VolumeRecord, VolumesPayload};
pub use source::{CatalogSource, FileCatalogSource};
