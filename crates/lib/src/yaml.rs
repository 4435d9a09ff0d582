//! YAML parsing and serialization for devfile documents.

use thiserror::Error;
use tracing::debug;

use crate::consts::SUPPORTED_SCHEMA_VERSIONS;
use crate::schema::Devfile;

/// Errors from parsing or serializing a devfile.
#[derive(Debug, Error)]
pub enum ParseError {
  #[error("invalid devfile yaml: {0}")]
  Yaml(#[from] serde_yaml::Error),

  /// Every devfile must carry a string `schemaVersion`.
  #[error("devfile has no schemaVersion")]
  MissingSchemaVersion,

  #[error("schemaVersion '{version}' is not supported (supported: {supported})", supported = SUPPORTED_SCHEMA_VERSIONS.join(", "))]
  UnsupportedSchemaVersion { version: String },
}

/// Parse devfile bytes, checking the schema version before decoding the
/// full document.
pub fn parse(bytes: &[u8]) -> Result<Devfile, ParseError> {
  let value: serde_yaml::Value = serde_yaml::from_slice(bytes)?;

  let version = value
    .get("schemaVersion")
    .and_then(serde_yaml::Value::as_str)
    .ok_or(ParseError::MissingSchemaVersion)?;

  // Prefix match so pre-release suffixes like "2.2.0-latest" pass.
  if !SUPPORTED_SCHEMA_VERSIONS.iter().any(|s| version.starts_with(s)) {
    return Err(ParseError::UnsupportedSchemaVersion {
      version: version.to_string(),
    });
  }

  debug!(schema_version = version, "parsing devfile");
  Ok(serde_yaml::from_value(value)?)
}

/// Serialize a devfile back to YAML.
pub fn to_yaml(devfile: &Devfile) -> Result<String, ParseError> {
  Ok(serde_yaml::to_string(devfile)?)
}
