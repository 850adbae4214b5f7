use prost::Message;
use prost_reflect::{DeserializeOptions, DynamicMessage, ReflectMessage, SerializeOptions};

use crate::config::WireCodecOptions;
use crate::error::MappingError;

/// Wire message ↔ JSON text, using the canonical protobuf JSON mapping
/// implemented by `prost-reflect`.
///
/// Works for any message that can describe itself: prost-generated types
/// with a `ReflectMessage` impl, or `DynamicMessage` for runtime schemas.
#[derive(Debug, Clone, Default)]
pub struct WireCodec {
    options: WireCodecOptions,
}

impl WireCodec {
    pub fn new(options: WireCodecOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &WireCodecOptions {
        &self.options
    }

    fn printer(&self) -> SerializeOptions {
        SerializeOptions::new()
            .skip_default_fields(!self.options.include_default_fields)
            .use_proto_field_name(self.options.use_proto_field_names)
            .use_enum_numbers(self.options.use_enum_numbers)
            .stringify_64_bit_integers(self.options.stringify_64_bit_integers)
    }

    fn parser(&self) -> DeserializeOptions {
        DeserializeOptions::new().deny_unknown_fields(!self.options.ignore_unknown_fields)
    }

    /// Print a message as JSON text.
    pub fn encode<M: ReflectMessage>(&self, message: &M) -> Result<String, MappingError> {
        let dynamic = message.transcode_to_dynamic();
        let mut serializer = serde_json::Serializer::new(Vec::new());
        dynamic
            .serialize_with_options(&mut serializer, &self.printer())
            .map_err(MappingError::wire)?;
        String::from_utf8(serializer.into_inner()).map_err(MappingError::wire)
    }

    /// Parse JSON text into the message produced by `builder`.
    ///
    /// The schema is taken from the builder's value. The text is parsed in
    /// full before anything is merged into that value, so a failure never
    /// leaves a half-populated message behind.
    pub fn decode<M, F>(&self, json: &str, builder: F) -> Result<M, MappingError>
    where
        M: ReflectMessage,
        F: FnOnce() -> M,
    {
        let mut target = builder();
        let mut deserializer = serde_json::Deserializer::from_str(json);
        let parsed = DynamicMessage::deserialize_with_options(
            target.descriptor(),
            &mut deserializer,
            &self.parser(),
        )
        .map_err(MappingError::wire)?;
        deserializer.end().map_err(MappingError::wire)?;

        target
            .merge(parsed.encode_to_vec().as_slice())
            .map_err(MappingError::wire)?;
        Ok(target)
    }
}
