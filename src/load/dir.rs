use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{LoadError, Resource};

/// Reads resources from a checkout of the site's static files.
pub async fn read_resource<T: DeserializeOwned>(
    root: &Path,
    resource: Resource,
) -> Result<T, LoadError> {
    let path: PathBuf = root.join("data").join(resource.file_name());
    debug!("Reading {}", path.display());

    let body = tokio::fs::read(&path)
        .await
        .map_err(|source| LoadError::Read { path, source })?;

    serde_json::from_slice(&body).map_err(|source| LoadError::Parse { resource, source })
}
