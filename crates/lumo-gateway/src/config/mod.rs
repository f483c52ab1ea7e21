//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use lumo_core::error::{LumoError, Result};

pub use schema::{GatewayConfig, GatewaySection};

/// Default config path, relative to the working directory.
pub const DEFAULT_PATH: &str = "lumo.yaml";

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| LumoError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

/// Load `path`, or built-in defaults when `path` is the default location and
/// no file exists there. An explicitly named file must exist.
pub fn load_or_default(path: Option<&str>) -> Result<GatewayConfig> {
    match path {
        Some(p) => load_from_file(p),
        None => match fs::read_to_string(DEFAULT_PATH) {
            Ok(s) => load_from_str(&s),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = DEFAULT_PATH, "no config file, using defaults");
                Ok(GatewayConfig::default())
            }
            Err(e) => Err(LumoError::Internal(format!(
                "read config failed ({DEFAULT_PATH}): {e}"
            ))),
        },
    }
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| LumoError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
