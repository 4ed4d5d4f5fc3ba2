use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub pages: PagesConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
}

/// Where saved page snapshots live.
#[derive(Debug, Deserialize, Clone)]
pub struct PagesConfig {
    #[serde(default = "default_pages_dir")]
    pub dir: PathBuf,
}

fn default_pages_dir() -> PathBuf {
    PathBuf::from("webpages")
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self { dir: default_pages_dir() }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct FetchConfig {
    #[serde(default = "default_fetch_timeout")]
    pub request_timeout_ms: u64,
    #[serde(default = "default_fetch_retries")]
    pub max_retries: u32,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_fetch_timeout() -> u64 { 10_000 }
fn default_fetch_retries() -> u32 { 2 }
fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36".to_string()
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: default_fetch_timeout(),
            max_retries: default_fetch_retries(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ExtractConfig {
    /// Apply last-token team naming to BetMGM as well.
    #[serde(default)]
    pub betmgm_last_token_names: bool,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .with_context(|| "Failed to parse config TOML")?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }
}

/// Print `label`, read one trimmed line from stdin.
pub fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;
    if read == 0 {
        anyhow::bail!("stdin closed");
    }
    Ok(input.trim().to_string())
}
