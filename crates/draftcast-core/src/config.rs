// Configuration loading and parsing (app.toml, teams.toml).

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::draft::Role;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Top-level assembled Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub oracle: OracleConfig,
    pub ui: UiConfig,
    /// Enumerated organizations offered by the team dropdowns, in file order.
    pub teams: Vec<TeamRoster>,
}

// ---------------------------------------------------------------------------
// app.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the entire app.toml file.
#[derive(Debug, Clone, Deserialize)]
struct AppFile {
    catalog: CatalogConfig,
    oracle: OracleConfig,
    #[serde(default)]
    ui: UiConfig,
}

/// Where the champion catalog lives and which patch/locale to request.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    pub base_url: String,
    /// Patch version, e.g. "15.1.1". Maintained by hand.
    pub version: String,
    /// Data Dragon locale, e.g. "pt_BR".
    pub locale: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OracleConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Champions shown per carousel page.
    pub carousel_page_size: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            carousel_page_size: 12,
        }
    }
}

// ---------------------------------------------------------------------------
// teams.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
struct TeamsFile {
    teams: Vec<TeamRoster>,
}

/// One organization and its starting five.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamRoster {
    pub name: String,
    pub top: String,
    pub jng: String,
    pub mid: String,
    pub bot: String,
    pub sup: String,
}

impl TeamRoster {
    /// The player listed for the given role.
    pub fn player(&self, role: Role) -> &str {
        match role {
            Role::Top => &self.top,
            Role::Jungle => &self.jng,
            Role::Mid => &self.mid,
            Role::Bottom => &self.bot,
            Role::Support => &self.sup,
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate configuration from `config/app.toml` and
/// `config/teams.toml`, relative to the given `base_dir`.
///
/// This does not copy defaults; `load_config()` does.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let config_dir = base_dir.join("config");

    let app_path = config_dir.join("app.toml");
    let app_text = read_file(&app_path)?;
    let app_file: AppFile = toml::from_str(&app_text).map_err(|e| ConfigError::ParseError {
        path: app_path.clone(),
        source: e,
    })?;

    let teams_path = config_dir.join("teams.toml");
    let teams_text = read_file(&teams_path)?;
    let teams_file: TeamsFile =
        toml::from_str(&teams_text).map_err(|e| ConfigError::ParseError {
            path: teams_path.clone(),
            source: e,
        })?;

    let config = Config {
        catalog: app_file.catalog,
        oracle: app_file.oracle,
        ui: app_file.ui,
        teams: teams_file.teams,
    };

    validate(&config)?;

    Ok(config)
}

/// Ensure all config files exist by copying missing ones from `defaults/`.
/// Returns the list of files that were copied. Skips `.example` files.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_dir = base_dir.join("defaults");
    let config_dir = base_dir.join("config");

    if !defaults_dir.exists() {
        if !config_dir.exists() {
            return Err(ConfigError::DefaultsCopyError {
                message: format!(
                    "neither defaults/ nor config/ directory found in {}; \
                     run from the project root or ensure defaults/ is present",
                    base_dir.display()
                ),
            });
        }
        return Ok(vec![]);
    }

    std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to create config directory: {e}"),
    })?;

    let mut copied = Vec::new();

    let entries = std::fs::read_dir(&defaults_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to read defaults directory: {e}"),
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to read defaults entry: {e}"),
        })?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name() else {
            continue;
        };
        if file_name.to_str().is_some_and(|n| n.ends_with(".example")) {
            continue;
        }
        let target = config_dir.join(file_name);

        match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
        {
            Ok(mut dest) => {
                let content = std::fs::read(&path).map_err(|e| ConfigError::DefaultsCopyError {
                    message: format!("failed to read {}: {e}", path.display()),
                })?;
                std::io::Write::write_all(&mut dest, &content).map_err(|e| {
                    ConfigError::DefaultsCopyError {
                        message: format!("failed to write {}: {e}", target.display()),
                    }
                })?;
                copied.push(target);
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                // Never overwrite user edits
            }
            Err(e) => {
                return Err(ConfigError::DefaultsCopyError {
                    message: format!("failed to create {}: {e}", target.display()),
                });
            }
        }
    }

    Ok(copied)
}

/// Convenience wrapper: loads config relative to the current working directory.
/// Ensures default config files are copied before loading.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        field: field.into(),
        message: message.into(),
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    let urls: &[(&str, &str)] = &[
        ("catalog.base_url", config.catalog.base_url.as_str()),
        ("oracle.base_url", config.oracle.base_url.as_str()),
    ];
    for (name, url) in urls {
        if let Err(e) = reqwest::Url::parse(url) {
            return Err(invalid(name, format!("not a valid URL ({e}): {url}")));
        }
    }

    if config.catalog.version.trim().is_empty() {
        return Err(invalid("catalog.version", "must not be empty"));
    }
    if config.catalog.locale.trim().is_empty() {
        return Err(invalid("catalog.locale", "must not be empty"));
    }

    if config.ui.carousel_page_size == 0 {
        return Err(invalid("ui.carousel_page_size", "must be > 0"));
    }

    // A match needs two distinct organizations to pick from
    if config.teams.len() < 2 {
        return Err(invalid(
            "teams",
            format!("at least 2 teams required, got {}", config.teams.len()),
        ));
    }

    let mut seen = HashSet::new();
    for (i, team) in config.teams.iter().enumerate() {
        if team.name.trim().is_empty() {
            return Err(invalid(&format!("teams[{i}].name"), "must not be empty"));
        }
        if !seen.insert(team.name.as_str()) {
            return Err(invalid(
                &format!("teams[{i}].name"),
                format!("duplicate team name `{}`", team.name),
            ));
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
