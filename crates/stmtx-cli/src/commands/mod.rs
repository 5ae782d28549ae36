//! Subcommand implementations.

pub mod config;
pub mod extract;
pub mod fetch;
pub mod output;
pub mod serve;

use std::path::Path;

use stmtx_core::StmtxConfig;

/// Load the configuration named on the command line, or the saved one, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<StmtxConfig> {
    if let Some(path) = config_path {
        return Ok(StmtxConfig::from_file(Path::new(path))?);
    }

    let saved = config::default_config_path();
    if saved.exists() {
        return Ok(StmtxConfig::from_file(&saved)?);
    }

    Ok(StmtxConfig::default())
}
