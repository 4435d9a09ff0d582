//! Fetch transports for import references.
//!
//! The resolver only needs bytes for a reference; the [`Fetcher`] trait is
//! the seam. Two transports are provided: [`HttpFetcher`] for URI and
//! registry references, and [`FileFetcher`] for devfiles referenced by
//! relative path on disk. In-cluster custom-resource lookup needs a
//! cluster client the caller owns, so neither built-in transport supports
//! kubernetes references.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};

use crate::schema::{ImportReference, ImportSource};

/// Errors from fetching an ancestor devfile.
#[derive(Debug, Error)]
pub enum FetchError {
  #[error("failed to fetch '{reference}': {source}")]
  Http {
    reference: String,
    #[source]
    source: reqwest::Error,
  },

  #[error("fetching '{reference}' returned HTTP status {status}")]
  Status { reference: String, status: u16 },

  #[error("failed to read '{reference}': {source}")]
  Io {
    reference: String,
    #[source]
    source: std::io::Error,
  },

  /// The reference variant is not supported by this fetcher.
  #[error("import reference '{reference}' is not supported by this fetcher")]
  Unsupported { reference: String },

  /// None of uri, id or kubernetes is populated.
  #[error("import reference must set one of uri, id or kubernetes")]
  EmptyReference,
}

/// Retrieves the raw bytes of the devfile a reference points at.
pub trait Fetcher {
  fn fetch(&self, reference: &ImportReference) -> Result<Vec<u8>, FetchError>;
}

/// Fetches URI and registry references over HTTP.
pub struct HttpFetcher {
  client: reqwest::blocking::Client,
  /// Base joined in front of relative URIs (e.g. the URL the referencing
  /// devfile itself was fetched from).
  base_url: Option<String>,
  /// Registry used for `id` references that carry no `registryUrl`.
  default_registry: Option<String>,
}

impl HttpFetcher {
  pub fn new() -> Self {
    HttpFetcher {
      client: reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_default(),
      base_url: None,
      default_registry: None,
    }
  }

  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = Some(base_url.into());
    self
  }

  pub fn with_default_registry(mut self, registry: impl Into<String>) -> Self {
    self.default_registry = Some(registry.into());
    self
  }

  /// The request URL for a reference, or `Unsupported` when the reference
  /// needs a transport this fetcher does not have.
  fn request_url(&self, reference: &ImportReference) -> Result<String, FetchError> {
    match reference.source() {
      Some(ImportSource::Uri(uri)) => {
        if uri.starts_with("http://") || uri.starts_with("https://") {
          return Ok(uri.to_string());
        }
        match &self.base_url {
          Some(base) => Ok(format!("{}/{}", base.trim_end_matches('/'), uri.trim_start_matches('/'))),
          None => Err(FetchError::Unsupported {
            reference: reference.to_string(),
          }),
        }
      }
      Some(ImportSource::Registry { id, registry_url }) => {
        let registry = registry_url
          .or(self.default_registry.as_deref())
          .ok_or_else(|| FetchError::Unsupported {
            reference: reference.to_string(),
          })?;
        let mut url = format!("{}/devfiles/{}", registry.trim_end_matches('/'), id);
        if let Some(version) = &reference.version {
          url.push('/');
          url.push_str(version);
        }
        Ok(url)
      }
      Some(ImportSource::Kubernetes { .. }) => Err(FetchError::Unsupported {
        reference: reference.to_string(),
      }),
      None => Err(FetchError::EmptyReference),
    }
  }
}

impl Default for HttpFetcher {
  fn default() -> Self {
    Self::new()
  }
}

impl Fetcher for HttpFetcher {
  fn fetch(&self, reference: &ImportReference) -> Result<Vec<u8>, FetchError> {
    let url = self.request_url(reference)?;
    info!(%url, "fetching imported devfile");

    let response = self.client.get(&url).send().map_err(|source| FetchError::Http {
      reference: reference.to_string(),
      source,
    })?;

    let status = response.status();
    if !status.is_success() {
      return Err(FetchError::Status {
        reference: reference.to_string(),
        status: status.as_u16(),
      });
    }

    let bytes = response.bytes().map_err(|source| FetchError::Http {
      reference: reference.to_string(),
      source,
    })?;
    debug!(len = bytes.len(), "fetched imported devfile");
    Ok(bytes.to_vec())
  }
}

/// Resolves `uri` references against a base directory on disk.
pub struct FileFetcher {
  base_dir: PathBuf,
}

impl FileFetcher {
  pub fn new(base_dir: impl Into<PathBuf>) -> Self {
    FileFetcher {
      base_dir: base_dir.into(),
    }
  }
}

impl Fetcher for FileFetcher {
  fn fetch(&self, reference: &ImportReference) -> Result<Vec<u8>, FetchError> {
    match reference.source() {
      Some(ImportSource::Uri(uri)) => {
        let path = self.base_dir.join(uri);
        debug!(path = %path.display(), "reading imported devfile");
        fs::read(&path).map_err(|source| FetchError::Io {
          reference: reference.to_string(),
          source,
        })
      }
      Some(_) => Err(FetchError::Unsupported {
        reference: reference.to_string(),
      }),
      None => Err(FetchError::EmptyReference),
    }
  }
}
