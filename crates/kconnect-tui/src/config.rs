//! Settings loading: TOML config file merged with `KCONNECT_`-prefixed
//! environment variables. CLI flags override both in `main`.

use std::path::PathBuf;

use color_eyre::eyre::Result;
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Connect REST base URL, e.g. "http://connect:8083".
    pub url: Option<String>,

    /// Editor command for config editing; falls back to `$EDITOR`.
    pub editor: Option<String>,

    /// Skip TLS certificate verification.
    #[serde(default)]
    pub insecure: bool,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            url: None,
            editor: None,
            insecure: false,
            timeout: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "kconnect", "kconnect").map_or_else(
        || {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("kconnect");
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

/// Load settings from file + environment. A missing file is not an error.
pub fn load_settings() -> Result<Settings> {
    let settings = Figment::new()
        .merge(Serialized::defaults(Settings::default()))
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("KCONNECT_"))
        .extract()?;
    Ok(settings)
}
