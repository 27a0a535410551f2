//! Client configuration: where the backend lives and where state is kept.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::session::write_atomic;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8092/api/v1";
pub const BASE_URL_ENV: &str = "AMS_BASE_URL";
pub const HOME_ENV: &str = "AMS_HOME";

const CONFIG_FILE: &str = "config.json";
const SESSION_FILE: &str = "session.json";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConfig {
    pub version: u32,

    /// Backend root including the API prefix, e.g. `http://host:8092/api/v1`.
    pub base_url: String,

    #[serde(skip)]
    pub state_dir: PathBuf,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, state_dir: impl Into<PathBuf>) -> Self {
        Self {
            version: 1,
            base_url: normalize_base_url(&base_url.into()),
            state_dir: state_dir.into(),
        }
    }

    /// `$AMS_HOME`, else `$HOME/.ams`, else `./.ams`.
    pub fn default_state_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return PathBuf::from(dir);
        }
        match std::env::var_os("HOME").filter(|v| !v.is_empty()) {
            Some(home) => PathBuf::from(home).join(".ams"),
            None => PathBuf::from(".ams"),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.state_dir.join(CONFIG_FILE)
    }

    pub fn session_path(&self) -> PathBuf {
        self.state_dir.join(SESSION_FILE)
    }

    /// Reads `config.json` from `state_dir`; a missing file yields defaults.
    pub fn load(state_dir: &Path) -> Result<Self> {
        let path = state_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::new(DEFAULT_BASE_URL, state_dir));
        }
        let bytes = fs::read(&path).with_context(|| format!("read {}", path.display()))?;
        let mut cfg: ClientConfig =
            serde_json::from_slice(&bytes).with_context(|| format!("parse {}", path.display()))?;
        if cfg.version != 1 {
            anyhow::bail!("unsupported config version {}", cfg.version);
        }
        cfg.base_url = normalize_base_url(&cfg.base_url);
        cfg.state_dir = state_dir.to_path_buf();
        Ok(cfg)
    }

    pub fn save(&self) -> Result<()> {
        self.validate()?;
        fs::create_dir_all(&self.state_dir)
            .with_context(|| format!("create {}", self.state_dir.display()))?;
        let bytes = serde_json::to_vec_pretty(self).context("serialize config")?;
        write_atomic(&self.config_path(), &bytes).context("write config.json")
    }

    /// Layers flag over env over file over defaults.
    pub fn resolve(state_dir: Option<PathBuf>, base_url: Option<String>) -> Result<Self> {
        let env_base_url = std::env::var(BASE_URL_ENV).ok();
        Self::layered(state_dir, base_url, env_base_url)
    }

    pub fn layered(
        state_dir: Option<PathBuf>,
        flag_base_url: Option<String>,
        env_base_url: Option<String>,
    ) -> Result<Self> {
        let state_dir = state_dir.unwrap_or_else(Self::default_state_dir);
        let mut cfg = Self::load(&state_dir)?;
        if let Some(url) = flag_base_url
            .or(env_base_url)
            .filter(|u| !u.trim().is_empty())
        {
            cfg.base_url = normalize_base_url(&url);
        }
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            anyhow::bail!("base url is empty (set it with `ams config set --base-url ...`)");
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            anyhow::bail!("base url must start with http:// or https://: {}", self.base_url);
        }
        Ok(())
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
