//! fixmesh-export - OBJ to fixed-point mesh converter
//!
//! Converts a quad-only OBJ (Blender export: forward +Y, up +Z, no normals,
//! no UVs, no materials) into the big-endian 16.16 `obj_data` artifact,
//! written to the current directory.

use anyhow::{Context, Result};
use clap::Parser;
use fixmesh_export::{Console, ExportError, FIXMESH_FORMAT, convert_obj};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "fixmesh-export")]
#[command(about = "Convert a quad OBJ mesh to 16.16 fixed-point binary")]
#[command(version)]
struct Cli {
    /// Input OBJ file
    #[arg(allow_hyphen_values = true)]
    input: Option<PathBuf>,

    /// Ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    _rest: Vec<String>,
}

fn main() -> Result<ExitCode> {
    // Initialize logging; stdout is reserved for progress output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut console = Console::stdout();

    match export(cli.input.as_deref(), &mut console) {
        Ok(written) => {
            tracing::info!("Done! {} bytes", written);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            console
                .error(&err)
                .context("Failed to write to stdout")?;
            tracing::debug!("Export failed: {:?}", err);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn export<W: Write>(input: Option<&Path>, console: &mut Console<W>) -> Result<u64, ExportError> {
    let input = input.ok_or(ExportError::MissingInput)?;
    convert_obj(input, Path::new(FIXMESH_FORMAT.output_name), console)
}
