use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    pub content: ContentConfig,
    #[serde(default)]
    pub state: StateConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: String::new(),
        }
    }
}

fn default_title() -> String {
    "Snippets".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContentConfig {
    /// Snippet data file (`snippetArray` JSON).
    pub snippets: PathBuf,
    /// Pre-rendered markdown nodes (JSON array).
    pub markdown: PathBuf,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StateConfig {
    /// Where the app state is persisted. In-memory when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:7340".to_string()
}

impl Config {
    /// Config used when no file is available: content in `./content`,
    /// state kept in memory.
    pub fn minimal() -> Self {
        Self {
            site: SiteConfig::default(),
            content: ContentConfig {
                snippets: PathBuf::from("content/snippet_data.json"),
                markdown: PathBuf::from("content/markdown.json"),
            },
            state: StateConfig::default(),
            server: ServerConfig::default(),
        }
    }

    /// Resolve relative content and state paths against `base`.
    fn resolve_paths(mut self, base: &Path) -> Self {
        let resolve = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        self.content.snippets = resolve(self.content.snippets);
        self.content.markdown = resolve(self.content.markdown);
        self.state.path = self.state.path.map(resolve);
        self
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config = parse_config(&content)?;

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    Ok(config.resolve_paths(base))
}

/// Parse and validate a config document without touching the filesystem.
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).with_context(|| "Failed to parse config file")?;

    // Validate content
    if config.content.snippets.as_os_str().is_empty() {
        bail!("content.snippets must not be empty");
    }
    if config.content.markdown.as_os_str().is_empty() {
        bail!("content.markdown must not be empty");
    }

    // Validate state
    if let Some(p) = &config.state.path {
        if p.as_os_str().is_empty() {
            bail!("state.path must not be empty when set");
        }
    }

    // Validate server
    if config.server.bind.parse::<SocketAddr>().is_err() {
        bail!(
            "server.bind must be a socket address (e.g. 127.0.0.1:7340), got '{}'",
            config.server.bind
        );
    }

    Ok(config)
}
