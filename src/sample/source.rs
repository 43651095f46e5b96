//! Sample source backed by an object store (S3, R2, GCS, Azure, local)

use crate::error::{Error, Result};
use crate::sample::types::SampledObject;
use futures::StreamExt;
use object_store::aws::AmazonS3Builder;
use object_store::azure::MicrosoftAzureBuilder;
use object_store::gcp::GoogleCloudStorageBuilder;
use object_store::local::LocalFileSystem;
use object_store::path::Path as ObjectPath;
use object_store::{ObjectMeta, ObjectStore};
use std::sync::Arc;
use tracing::debug;

/// A container to sample files from, parsed from a URL
#[derive(Debug, Clone)]
pub struct SampleSource {
    /// The object store implementation
    store: Arc<dyn ObjectStore>,
    /// Container label used in object identifiers and error messages
    container: String,
}

impl SampleSource {
    /// Parse a container URL and create the appropriate object store.
    ///
    /// Supported formats:
    /// - `s3://bucket` - AWS S3
    /// - `r2://bucket` - Cloudflare R2 (S3-compatible)
    /// - `gs://bucket` - Google Cloud Storage
    /// - `az://container` - Azure Blob Storage
    /// - `/local/path` or `./path` - Local filesystem
    ///
    /// Cloud credentials are read from the environment by the respective
    /// `from_env` builders.
    pub fn parse(url: &str) -> Result<Self> {
        if let Some(rest) = url.strip_prefix("s3://") {
            Self::build_s3(url, rest, false)
        } else if let Some(rest) = url.strip_prefix("r2://") {
            Self::build_s3(url, rest, true)
        } else if let Some(rest) = url.strip_prefix("gs://") {
            let bucket = container_name(url, rest)?;
            let store = GoogleCloudStorageBuilder::from_env()
                .with_bucket_name(bucket)
                .build()
                .map_err(|e| Error::config(format!("failed to create GCS client: {e}")))?;
            Ok(Self::with_store(Arc::new(store), bucket))
        } else if let Some(rest) = url.strip_prefix("az://") {
            let container = container_name(url, rest)?;
            let store = MicrosoftAzureBuilder::from_env()
                .with_container_name(container)
                .build()
                .map_err(|e| Error::config(format!("failed to create Azure client: {e}")))?;
            Ok(Self::with_store(Arc::new(store), container))
        } else {
            Self::build_local(url)
        }
    }

    /// Wrap an existing object store. Tests inject
    /// `object_store::memory::InMemory` through this.
    pub fn with_store(store: Arc<dyn ObjectStore>, container: impl Into<String>) -> Self {
        Self {
            store,
            container: container.into(),
        }
    }

    /// Container label this source samples from.
    pub fn container(&self) -> &str {
        &self.container
    }

    fn build_s3(url: &str, rest: &str, is_r2: bool) -> Result<Self> {
        let bucket = container_name(url, rest)?;
        let mut builder = AmazonS3Builder::from_env().with_bucket_name(bucket);

        // R2 endpoint: https://<account_id>.r2.cloudflarestorage.com
        // AWS_ENDPOINT is already read by from_env()
        if is_r2 {
            if let Ok(endpoint) = std::env::var("R2_ENDPOINT_URL") {
                builder = builder.with_endpoint(endpoint);
            }
        }

        let store = builder
            .build()
            .map_err(|e| Error::config(format!("failed to create S3 client: {e}")))?;

        Ok(Self::with_store(Arc::new(store), bucket))
    }

    fn build_local(path: &str) -> Result<Self> {
        let path = path.strip_prefix("file://").unwrap_or(path);

        let store = LocalFileSystem::new_with_prefix(path)
            .map_err(|e| Error::config(format!("failed to open local store {path}: {e}")))?;

        Ok(Self::with_store(Arc::new(store), path))
    }

    /// Fetch up to `limit` non-empty objects whose keys end in `suffix`.
    ///
    /// Performs a single bounded listing: at most `limit` keys are taken
    /// from the listing before the suffix and size filters apply, so the
    /// result may hold fewer matches than exist under the prefix. Objects
    /// are returned in listing order with their contents fetched.
    ///
    /// The prefix is path-segment-aligned, not a raw string prefix:
    /// `data` matches `data/x.json` but not `database/y.json`.
    pub async fn sample(
        &self,
        prefix: &str,
        suffix: &str,
        limit: usize,
    ) -> Result<Vec<SampledObject>> {
        let prefix_path = (!prefix.is_empty()).then(|| ObjectPath::from(prefix));
        let mut listing = self.store.list(prefix_path.as_ref()).take(limit);

        let mut matches: Vec<ObjectMeta> = Vec::new();
        while let Some(entry) = listing.next().await {
            let meta = entry?;
            if meta.location.as_ref().ends_with(suffix) && meta.size > 0 {
                matches.push(meta);
            }
        }
        debug!(
            container = self.container.as_str(),
            prefix,
            suffix,
            matched = matches.len(),
            "listed sample candidates"
        );

        let mut objects = Vec::with_capacity(matches.len());
        for meta in matches {
            let data = self.store.get(&meta.location).await?.bytes().await?;
            objects.push(SampledObject::new(
                self.container.clone(),
                meta.location.to_string(),
                data,
            ));
        }

        Ok(objects)
    }
}

/// Extract the container name from a scheme-stripped URL, rejecting empty
/// names and in-container paths (prefixes are passed per sample call).
fn container_name<'a>(url: &str, rest: &'a str) -> Result<&'a str> {
    let name = rest.split('/').next().unwrap_or_default();
    if name.is_empty() {
        return Err(Error::config(format!("missing container name in '{url}'")));
    }
    if rest.trim_end_matches('/') != name {
        return Err(Error::config(format!(
            "expected a container-level URL, got a path: '{url}'"
        )));
    }
    Ok(name)
}
