//! Flag/file/default layering for the connection and logging settings.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;

use flowsweep_engine::ConnectionConfig;

use crate::Args;

/// Config file looked up in the working directory when --config is absent.
pub const DEFAULT_CONFIG_FILE: &str = "flowsweep.yml";

/// Optional YAML configuration file. Every key mirrors a CLI flag; flags
/// win over file values, file values win over built-in defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub ssl: Option<bool>,
    pub validate_ssl: Option<bool>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub base_endpoint: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub proxy: Option<String>,
    pub socks: Option<bool>,
    pub log_level: Option<u8>,
    pub log_file: Option<PathBuf>,
}

impl FileConfig {
    /// Load the file at `path`.
    ///
    /// `required` distinguishes an explicitly given --config (must exist)
    /// from the default lookup (may be absent).
    pub fn load(path: &Path, required: bool) -> anyhow::Result<Self> {
        if !path.exists() {
            if required {
                anyhow::bail!("config file not found: {}", path.display());
            }
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_yaml::from_str(&data).with_context(|| format!("parsing {}", path.display()))
    }
}

/// Fully resolved settings for one run.
#[derive(Debug)]
pub struct Settings {
    pub connection: ConnectionConfig,
    pub log_level: u8,
    pub log_file: Option<PathBuf>,
}

/// Layer CLI flags over file values over built-in defaults.
///
/// Boolean flags are presence-only, so a set flag always wins and an unset
/// one defers to the file.
pub fn resolve(args: &Args, file: FileConfig) -> Settings {
    let defaults = ConnectionConfig::default();
    let connection = ConnectionConfig {
        use_tls: if args.ssl {
            true
        } else {
            file.ssl.unwrap_or(defaults.use_tls)
        },
        server: args.host.clone().or(file.host).unwrap_or(defaults.server),
        port: args.port.or(file.port).unwrap_or(defaults.port),
        base_path: args
            .base_endpoint
            .clone()
            .or(file.base_endpoint)
            .unwrap_or(defaults.base_path),
        user: args.user.clone().or(file.user).unwrap_or(defaults.user),
        password: args
            .password
            .clone()
            .or(file.password)
            .unwrap_or(defaults.password),
        validate_tls: if args.insecure {
            false
        } else {
            file.validate_ssl.unwrap_or(defaults.validate_tls)
        },
        proxy: args.proxy.clone().or(file.proxy).unwrap_or(defaults.proxy),
        proxy_is_socks: if args.socks {
            true
        } else {
            file.socks.unwrap_or(defaults.proxy_is_socks)
        },
        timeout: defaults.timeout,
    };

    Settings {
        connection,
        log_level: args.log_level.or(file.log_level).unwrap_or(4),
        log_file: args.log_file.clone().or(file.log_file),
    }
}

/// Fold the 0-5 verbosity scale onto tracing levels.
pub fn level_filter(level: u8) -> LevelFilter {
    match level {
        0 => LevelFilter::OFF,
        1 | 2 => LevelFilter::ERROR,
        3 => LevelFilter::WARN,
        4 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}
