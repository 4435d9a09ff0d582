//! Well-known constants shared across the crate.

/// Attribute key recording which import contributed an entity.
///
/// Stamped on every command, component, project and starter project that
/// reaches the main devfile through parent or plugin resolution. The key and
/// its string values round-trip through YAML serialization, so downstream
/// consumers can audit a flattened devfile after the fact.
pub const IMPORTED_FROM_ATTRIBUTE: &str = "library.devfile.io/imported-from";

/// Source descriptor for entities defined directly in the main devfile.
pub const MAIN_DEVFILE_SOURCE: &str = "main devfile";

/// Descriptor prefix for entities touched by a `parent.commands`-style
/// override rather than contributed as-is by the parent.
pub const PARENT_OVERRIDE_PREFIX: &str = "parentOverrides from:";

/// Descriptor prefix for entities touched by a plugin override.
pub const PLUGIN_OVERRIDE_PREFIX: &str = "pluginOverrides from:";

/// Devfile schema versions this library understands.
///
/// Matching is by prefix so pre-release suffixes ("2.2.0-latest") pass.
pub const SUPPORTED_SCHEMA_VERSIONS: &[&str] = &["2.0.0", "2.1.0", "2.2.0"];
