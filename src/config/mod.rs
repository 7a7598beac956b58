//! Site configuration management for `milkyway.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [site], [nav], [build], [[pages]]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # config file lookup
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! Every field has a default that reproduces the academy site, so a project
//! without a config file still renders the full default site.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

/// Config file name looked up when `-C` is not given.
pub const DEFAULT_CONFIG: &str = "milkyway.toml";

pub use section::{BuildSectionConfig, NavConfig, PageConfig, SiteInfoConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{BuildArgs, Cli, Commands},
    debug, log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing milkyway.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file, empty when running on defaults
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Brand, domain, fixed assets
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Header links and overlay
    #[serde(default)]
    pub nav: NavConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildSectionConfig,

    /// Pages to render
    #[serde(default = "section::default_pages")]
    pub pages: Vec<PageConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            site: SiteInfoConfig::default(),
            nav: NavConfig::default(),
            build: BuildSectionConfig::default(),
            pages: section::default_pages(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. Without `-C`, a missing
    /// `milkyway.toml` means the built-in defaults with cwd as the project
    /// root. A missing file named by `-C` is an error.
    pub fn load(cli: &Cli) -> Result<Self> {
        if let Commands::Build { build_args } = &cli.command {
            crate::logger::set_verbose(build_args.verbose);
        }

        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match Self::locate(cli.config.as_deref(), &cwd)? {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or(cwd);
                config.config_path = path;
                config
            }
            None => {
                debug!("config"; "{} not found, using built-in defaults", DEFAULT_CONFIG);
                Self {
                    root: cwd,
                    ..Self::default()
                }
            }
        };

        config.apply_command_options(cli);
        config.build.output = config.root.join(&config.build.output);
        config.validate()?;

        Ok(config)
    }

    /// Find the config file to load, if any.
    fn locate(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
        match explicit {
            Some(path) => find_config_file(cwd, path)
                .map(Some)
                .ok_or_else(|| ConfigError::NotFound(path.to_path_buf()).into()),
            None => Ok(find_config_file(cwd, Path::new(DEFAULT_CONFIG))),
        }
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::from)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Absolute output directory.
    pub fn output_dir(&self) -> &Path {
        &self.build.output
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { build_args } => self.apply_build_args(build_args),
            // Meta and validate read config only
            Commands::Meta { .. } | Commands::Validate => {}
        }
    }

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        if args.clean {
            self.build.clean = true;
        }
        Self::update_option(&mut self.build.output, args.output.as_ref());
        Self::update_option(&mut self.site.domain, args.site_url.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.nav.validate(&mut diag);
        section::validate_pages(&self.pages, &mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

impl FromStr for SiteConfig {
    type Err = anyhow::Error;

    /// Parse configuration from a TOML string.
    fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }
}

// ============================================================================
// tests
// ============================================================================
