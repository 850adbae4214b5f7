use std::io::{Read, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use proto_mapper::{CustomizerChain, MapperConfig, RemoveField, RenameField};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "proto-mapper", about = "Map between protobuf messages and JSON documents")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// JSON document → binary protobuf message
    Encode(MapArgs),
    /// Binary protobuf message → JSON document
    Decode(MapArgs),
}

#[derive(Args, Clone, Debug)]
pub struct MapArgs {
    /// FileDescriptorSet (`protoc --descriptor_set_out`)
    #[arg(long)]
    pub descriptor_set: PathBuf,

    /// Fully-qualified message type name (e.g. "demo.Person")
    #[arg(long)]
    pub message: String,

    /// Input file; stdin when omitted
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Output file; stdout when omitted
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Mapper TOML config ([text] / [wire] tables)
    #[arg(long, env = "PROTO_MAPPER_CONFIG")]
    pub config: Option<String>,

    /// Rename a top-level JSON property between the legs. Applied before --remove.
    #[arg(long = "rename", value_name = "FROM=TO")]
    pub renames: Vec<String>,

    /// Drop a top-level JSON property between the legs
    #[arg(long = "remove", value_name = "NAME")]
    pub removes: Vec<String>,
}

impl MapArgs {
    pub fn mapper_config(&self) -> Result<MapperConfig, CliError> {
        match &self.config {
            Some(path) => Ok(MapperConfig::load(path)?),
            None => Ok(MapperConfig::default()),
        }
    }

    pub fn customizers(&self) -> Result<CustomizerChain, CliError> {
        let mut chain = CustomizerChain::new();
        for spec in &self.renames {
            let (from, to) = spec
                .split_once('=')
                .filter(|(from, to)| !from.is_empty() && !to.is_empty())
                .ok_or_else(|| CliError::InvalidRename(spec.clone()))?;
            chain.push(RenameField::new(from, to));
        }
        for name in &self.removes {
            chain.push(RemoveField::new(name.as_str()));
        }
        Ok(chain)
    }

    pub fn read_input(&self) -> Result<Vec<u8>, CliError> {
        match &self.input {
            Some(path) => std::fs::read(path)
                .map_err(|e| CliError::io(format!("read '{}'", path.display()), e)),
            None => {
                let mut buf = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut buf)
                    .map_err(|e| CliError::io("read stdin", e))?;
                Ok(buf)
            }
        }
    }

    pub fn write_output(&self, bytes: &[u8]) -> Result<(), CliError> {
        match &self.output {
            Some(path) => std::fs::write(path, bytes)
                .map_err(|e| CliError::io(format!("write '{}'", path.display()), e)),
            None => std::io::stdout()
                .write_all(bytes)
                .map_err(|e| CliError::io("write stdout", e)),
        }
    }
}
