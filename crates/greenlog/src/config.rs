use serde::Serialize;
use std::env;
use std::path::PathBuf;

/// Runtime configuration, read from the environment.
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | `GREENLOG_BIND` | `0.0.0.0:8080` | listen address |
/// | `GREENLOG_DATA_FILE` | `actions.json` | path of the JSON collection file |
/// | `GREENLOG_LOG_JSON` | `false` | JSON log output |
#[derive(Debug, Clone, Serialize)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub data_file: PathBuf,
    pub log_json: bool,
}

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("GREENLOG_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            data_file: env::var("GREENLOG_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("actions.json")),
            log_json: env_bool("GREENLOG_LOG_JSON", false),
        }
    }
}
