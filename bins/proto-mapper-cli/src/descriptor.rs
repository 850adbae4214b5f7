use std::path::Path;

use prost_reflect::{DescriptorPool, MessageDescriptor};

use crate::error::CliError;

/// Load `message_type` from a FileDescriptorSet file.
pub fn load(path: &Path, message_type: &str) -> Result<MessageDescriptor, CliError> {
    let bytes = std::fs::read(path)
        .map_err(|e| CliError::io(format!("read descriptor set '{}'", path.display()), e))?;
    let pool = DescriptorPool::decode(bytes.as_slice())
        .map_err(|e| CliError::Descriptor(format!("failed to parse descriptor set: {e}")))?;
    let descriptor = pool.get_message_by_name(message_type).ok_or_else(|| {
        CliError::Descriptor(format!("message type '{message_type}' not found in descriptor set"))
    })?;
    tracing::debug!(message = %message_type, path = %path.display(), "loaded descriptor");
    Ok(descriptor)
}
