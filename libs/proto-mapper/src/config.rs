use serde::Deserialize;

use crate::error::ConfigError;

/// Options of the domain object ↔ JSON text leg.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TextCodecOptions {
    /// Drop `null` object members on encode so that absent domain values
    /// never overwrite wire message defaults.
    pub omit_null_fields: bool,
    /// Reject sources that encode to an empty JSON object.
    pub fail_on_empty_object: bool,
}

impl Default for TextCodecOptions {
    fn default() -> Self {
        Self {
            omit_null_fields: true,
            fail_on_empty_object: false,
        }
    }
}

/// Options of the wire message ↔ JSON text leg.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WireCodecOptions {
    /// Print fields holding their schema default (0, "", false, empty list).
    pub include_default_fields: bool,
    /// Skip JSON properties that match no field of the target schema.
    pub ignore_unknown_fields: bool,
    /// Print `snake_case` proto field names instead of lowerCamelCase JSON names.
    pub use_proto_field_names: bool,
    /// Print enum values as numbers instead of names.
    pub use_enum_numbers: bool,
    /// Print 64-bit integers as JSON strings. Off by default: serde reads
    /// `i64`/`u64` only from JSON numbers. The wire parser accepts both forms.
    pub stringify_64_bit_integers: bool,
}

impl Default for WireCodecOptions {
    fn default() -> Self {
        Self {
            include_default_fields: true,
            ignore_unknown_fields: true,
            use_proto_field_names: false,
            use_enum_numbers: false,
            stringify_64_bit_integers: false,
        }
    }
}

/// Root configuration — parsed from TOML.
///
/// ```toml
/// [text]
/// omit_null_fields = true
///
/// [wire]
/// use_proto_field_names = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MapperConfig {
    #[serde(default)]
    pub text: TextCodecOptions,
    #[serde(default)]
    pub wire: WireCodecOptions,
}

impl MapperConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }
}
