use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::TextCodecOptions;
use crate::error::{ErrorKind, MappingError};

/// Domain object ↔ JSON text, backed by `serde_json`.
///
/// Configured once; holds no per-call state.
#[derive(Debug, Clone, Default)]
pub struct TextCodec {
    options: TextCodecOptions,
}

impl TextCodec {
    pub fn new(options: TextCodecOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TextCodecOptions {
        &self.options
    }

    /// Serialize a domain object to JSON text.
    ///
    /// Default-valued members (0, false, "", []) are always written; only
    /// `null` members are dropped, and only when `omit_null_fields` is set.
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, MappingError> {
        let mut json = serde_json::to_value(value).map_err(MappingError::text)?;
        if self.options.omit_null_fields {
            strip_nulls(&mut json);
        }
        if self.options.fail_on_empty_object && matches!(&json, Value::Object(m) if m.is_empty()) {
            return Err(MappingError::new(
                ErrorKind::TextCodec,
                "source encodes to an empty object",
            ));
        }
        serde_json::to_string(&json).map_err(MappingError::text)
    }

    /// Deserialize JSON text into a domain object.
    ///
    /// Unknown properties are ignored unless the target type opts into
    /// `#[serde(deny_unknown_fields)]`.
    pub fn decode<T: DeserializeOwned>(&self, json: &str) -> Result<T, MappingError> {
        serde_json::from_str(json).map_err(MappingError::text)
    }
}

/// Remove `null` object members at every depth. `null` array elements stay:
/// dropping them would shift positions.
fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}
