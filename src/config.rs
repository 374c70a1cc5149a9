use serde::Deserialize;

/// Embedded policy data. The rule set is fixed at build time; there is no
/// user config file or CLI surface.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

#[derive(Debug, Deserialize)]
pub struct Config {
    pub tools: ToolConfig,
    pub git: GitConfig,
    pub network: NetworkConfig,
    pub deletion: DeletionConfig,
}

#[derive(Debug, Deserialize)]
pub struct ToolConfig {
    /// Tool identities that execute shell text (aliases across hosts).
    pub shell: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct GitConfig {
    /// Read-only subcommands; everything else blocks.
    pub allowed_subcommands: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct NetworkConfig {
    /// Programs blocked wherever they appear as a token.
    pub blocked: Vec<String>,
    /// Program blocked only in its remote form.
    pub remote_copy: String,
}

#[derive(Debug, Deserialize)]
pub struct DeletionConfig {
    /// The deletion program the structural checks are scoped to.
    pub program: String,
}

impl Config {
    /// Load the embedded policy data. A parse failure here is a build
    /// defect, not a runtime condition.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }
}
