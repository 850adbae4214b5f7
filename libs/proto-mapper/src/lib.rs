//! Map between protobuf messages and plain serde types through JSON.
//!
//! [`ProtoMapper`] encodes the source (serde or canonical protobuf JSON),
//! runs the text through an ordered list of [`Customizer`]s and decodes the
//! target. Wire messages are any `prost_reflect::ReflectMessage`, including
//! `DynamicMessage` for schemas loaded at runtime.

pub mod base64_bytes;
pub mod config;
pub mod customizer;
pub mod error;
pub mod mapper;
pub mod text;
pub mod wire;

pub use config::{MapperConfig, TextCodecOptions, WireCodecOptions};
pub use customizer::{
    Customizer, CustomizerChain, DefaultField, RemoveField, RenameField, ValueCustomizer,
};
pub use error::{ConfigError, ErrorKind, MappingError};
pub use mapper::ProtoMapper;
pub use text::TextCodec;
pub use wire::WireCodec;

// Re-exported so callers build messages against the same versions.
pub use prost;
pub use prost_reflect;
