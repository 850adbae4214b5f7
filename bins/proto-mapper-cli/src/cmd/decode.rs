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
    let json = decode(&mapper, &desc, &chain, &input)?;
    tracing::info!(message = %args.message, bytes = input.len(), "decoded");
    args.write_output(&json)
}

/// Protobuf bytes → pretty-printed JSON document bytes.
pub fn decode(
    mapper: &ProtoMapper,
    desc: &MessageDescriptor,
    chain: &dyn Customizer,
    input: &[u8],
) -> Result<Vec<u8>, CliError> {
    let message = DynamicMessage::decode(desc.clone(), input)?;
    let document: serde_json::Value = mapper.map_proto_to_object_with(&message, &[chain])?;
    let mut out = serde_json::to_vec_pretty(&document).map_err(MappingError::text)?;
    out.push(b'\n');
    Ok(out)
}
