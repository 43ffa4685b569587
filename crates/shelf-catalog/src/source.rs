//! Catalog loading.
//!
//! The [`CatalogSource`] trait is the seam between the session engine and
//! whatever holds the payload; the engine takes it as a constructor
//! dependency so tests can swap in an in-memory double.

use std::fs;
use std::path::{Path, PathBuf};

use shelf_model::Book;

use crate::error::Result;
use crate::payload::{VolumeRecord, VolumesPayload};

/// A source of the full book collection.
///
/// `Send + Sync` so an `Arc<dyn CatalogSource>` can be shared with the
/// background loader thread.
pub trait CatalogSource: Send + Sync {
    /// Load the entire catalog. All-or-nothing: any failure yields `Err`.
    fn load(&self) -> Result<Vec<Book>>;
}

/// Loads the catalog from a bundled JSON payload on disk.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileCatalogSource {
    fn load(&self) -> Result<Vec<Book>> {
        let raw = fs::read_to_string(&self.path)?;
        let payload: VolumesPayload = serde_json::from_str(&raw)?;
        let advertised = payload.total_items;
        let books: Vec<Book> = payload
            .items
            .into_iter()
            .map(VolumeRecord::into_book)
            .collect();
        if let Some(total) = advertised
            && total as usize != books.len()
        {
            tracing::warn!(
                advertised = total,
                actual = books.len(),
                "payload totalItems does not match record count"
            );
        }
        tracing::info!(
            count = books.len(),
            path = %self.path.display(),
            "loaded catalog payload"
        );
        Ok(books)
    }
}
