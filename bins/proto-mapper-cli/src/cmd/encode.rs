use prost::Message;
use prost_reflect::{DynamicMessage, MessageDescriptor};
use proto_mapper::{Customizer, MappingError, ProtoMapper};

use crate::config::MapArgs;
use crate::descriptor;
use crate::error::CliError;

pub fn run(args: MapArgs) -> Result<(), CliError> {
    let desc = descriptor::load(&args.descriptor_set, &args.message)?;
    let mapper = ProtoMapper::from_config(&args.mapper_config()?);
    let chain = args.customizers()?;

    let input = args.read_input()?;
    let bytes = encode(&mapper, &desc, &chain, &input)?;
    tracing::info!(message = %args.message, bytes = bytes.len(), "encoded");
    args.write_output(&bytes)
}

/// JSON document bytes → protobuf bytes.
pub fn encode(
    mapper: &ProtoMapper,
    desc: &MessageDescriptor,
    chain: &dyn Customizer,
    input: &[u8],
) -> Result<Vec<u8>, CliError> {
    let document: serde_json::Value = serde_json::from_slice(input).map_err(MappingError::text)?;
    let builder = || DynamicMessage::new(desc.clone());
    let message = mapper.map_object_to_proto_with(&document, builder, &[chain])?;
    Ok(message.encode_to_vec())
}
