#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("io ({context}): {source}")]
    Io { context: String, source: std::io::Error },

    #[error("descriptor: {0}")]
    Descriptor(String),

    #[error("invalid --rename '{0}', expected FROM=TO")]
    InvalidRename(String),

    #[error("{0}")]
    Config(#[from] proto_mapper::ConfigError),

    #[error("{0}")]
    Mapping(#[from] proto_mapper::MappingError),

    #[error("protobuf decode: {0}")]
    Decode(#[from] prost::DecodeError),
}

impl CliError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }
}
