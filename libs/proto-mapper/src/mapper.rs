use prost_reflect::ReflectMessage;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::MapperConfig;
use crate::customizer::{self, Customizer};
use crate::error::MappingError;
use crate::text::TextCodec;
use crate::wire::WireCodec;

/// Converts between domain objects and wire messages through JSON text.
///
/// Every conversion runs the same three steps: encode the source, pass the
/// text through the customizers in order, decode the target. Which codec
/// handles each side depends on the source and target:
///
/// | method                   | encode | decode |
/// |--------------------------|--------|--------|
/// | `map_object`             | text   | text   |
/// | `map_object_to_proto`    | text   | wire   |
/// | `map_proto`              | wire   | wire   |
/// | `map_proto_to_object`    | wire   | text   |
///
/// Wire targets are produced by a caller-supplied builder, e.g.
/// `Person::default` or `|| DynamicMessage::new(desc.clone())`.
///
/// Holds only immutable codec configuration, so one instance can be shared
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct ProtoMapper {
    text: TextCodec,
    wire: WireCodec,
}

impl ProtoMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_codecs(text: TextCodec, wire: WireCodec) -> Self {
        Self { text, wire }
    }

    pub fn from_config(config: &MapperConfig) -> Self {
        Self {
            text: TextCodec::new(config.text.clone()),
            wire: WireCodec::new(config.wire.clone()),
        }
    }

    pub fn text_codec(&self) -> &TextCodec {
        &self.text
    }

    pub fn wire_codec(&self) -> &WireCodec {
        &self.wire
    }

    // ---- Conversions ----

    /// Domain object → domain object.
    pub fn map_object<S, T>(&self, source: &S) -> Result<T, MappingError>
    where
        S: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.map_object_with(source, &[])
    }

    pub fn map_object_with<S, T>(
        &self,
        source: &S,
        customizers: &[&dyn Customizer],
    ) -> Result<T, MappingError>
    where
        S: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.run(
            "object->object",
            || self.object_to_json(source),
            customizers,
            |json| self.json_to_object(json),
        )
    }

    /// Domain object → wire message built by `builder`.
    pub fn map_object_to_proto<S, M, F>(&self, source: &S, builder: F) -> Result<M, MappingError>
    where
        S: Serialize + ?Sized,
        M: ReflectMessage,
        F: FnOnce() -> M,
    {
        self.map_object_to_proto_with(source, builder, &[])
    }

    pub fn map_object_to_proto_with<S, M, F>(
        &self,
        source: &S,
        builder: F,
        customizers: &[&dyn Customizer],
    ) -> Result<M, MappingError>
    where
        S: Serialize + ?Sized,
        M: ReflectMessage,
        F: FnOnce() -> M,
    {
        self.run(
            "object->proto",
            || self.object_to_json(source),
            customizers,
            |json| self.json_to_proto(json, builder),
        )
    }

    /// Wire message → wire message built by `builder`.
    pub fn map_proto<P, M, F>(&self, source: &P, builder: F) -> Result<M, MappingError>
    where
        P: ReflectMessage,
        M: ReflectMessage,
        F: FnOnce() -> M,
    {
        self.map_proto_with(source, builder, &[])
    }

    pub fn map_proto_with<P, M, F>(
        &self,
        source: &P,
        builder: F,
        customizers: &[&dyn Customizer],
    ) -> Result<M, MappingError>
    where
        P: ReflectMessage,
        M: ReflectMessage,
        F: FnOnce() -> M,
    {
        self.run(
            "proto->proto",
            || self.proto_to_json(source),
            customizers,
            |json| self.json_to_proto(json, builder),
        )
    }

    /// Wire message → domain object.
    pub fn map_proto_to_object<P, T>(&self, source: &P) -> Result<T, MappingError>
    where
        P: ReflectMessage,
        T: DeserializeOwned,
    {
        self.map_proto_to_object_with(source, &[])
    }

    pub fn map_proto_to_object_with<P, T>(
        &self,
        source: &P,
        customizers: &[&dyn Customizer],
    ) -> Result<T, MappingError>
    where
        P: ReflectMessage,
        T: DeserializeOwned,
    {
        self.run(
            "proto->object",
            || self.proto_to_json(source),
            customizers,
            |json| self.json_to_object(json),
        )
    }

    // ---- Primitives ----

    pub fn object_to_json<S>(&self, source: &S) -> Result<String, MappingError>
    where
        S: Serialize + ?Sized,
    {
        self.text.encode(source)
    }

    pub fn json_to_object<T: DeserializeOwned>(&self, json: &str) -> Result<T, MappingError> {
        self.text.decode(json)
    }

    pub fn proto_to_json<P: ReflectMessage>(&self, source: &P) -> Result<String, MappingError> {
        self.wire.encode(source)
    }

    pub fn json_to_proto<M, F>(&self, json: &str, builder: F) -> Result<M, MappingError>
    where
        M: ReflectMessage,
        F: FnOnce() -> M,
    {
        self.wire.decode(json, builder)
    }

    pub fn apply_customizers(
        &self,
        json: String,
        customizers: &[&dyn Customizer],
    ) -> Result<String, MappingError> {
        customizer::apply_chain(json, customizers)
    }

    /// encode → customize → decode. The first failure aborts the rest.
    fn run<T>(
        &self,
        pipeline: &'static str,
        encode: impl FnOnce() -> Result<String, MappingError>,
        customizers: &[&dyn Customizer],
        decode: impl FnOnce(&str) -> Result<T, MappingError>,
    ) -> Result<T, MappingError> {
        tracing::debug!(pipeline, customizers = customizers.len(), "mapping");
        let result = encode()
            .and_then(|json| self.apply_customizers(json, customizers))
            .and_then(|json| decode(&json));
        if let Err(e) = &result {
            tracing::debug!(pipeline, kind = %e.kind(), error = %e, "mapping failed");
        }
        result
    }
}
