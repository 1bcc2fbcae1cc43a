use std::collections::HashMap;

use crate::error::UpstreamError;
use crate::google::{FolderEntry, GoogleClient};

/// Name → file-id lookup over one photo folder, resolved against a public
/// host. Built once per request and read-only afterwards.
pub struct PhotoLookup {
    host: String,
    entries: HashMap<String, String>,
}

impl PhotoLookup {
    /// Folder-listing order is whatever Drive returned; when two entries
    /// share a name the later one wins. Entries without both a name and an
    /// id are skipped.
    pub fn from_entries(host: impl Into<String>, listing: Vec<FolderEntry>) -> Self {
        let mut entries = HashMap::new();
        for entry in listing {
            let (Some(name), Some(id)) = (entry.name, entry.id) else {
                continue;
            };
            if let Some(previous) = entries.insert(name.clone(), id) {
                tracing::warn!(%name, previous_id = %previous, "duplicate photo name in folder listing");
            }
        }
        PhotoLookup {
            host: host.into(),
            entries,
        }
    }

    /// Empty string for an empty or unknown name, `<host>/<id>` otherwise.
    pub fn resolve(&self, name: &str) -> String {
        match self.entries.get(name) {
            Some(id) if !name.is_empty() => format!("{}/{}", self.host, id),
            _ => String::new(),
        }
    }
}

/// Lists the folder and builds the lookup. Listing failures propagate.
pub async fn build_lookup(
    google: &GoogleClient,
    folder_id: &str,
    host: &str,
) -> Result<PhotoLookup, UpstreamError> {
    let listing = google.folder_entries(folder_id).await?;
    Ok(PhotoLookup::from_entries(host, listing))
}
