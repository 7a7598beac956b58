//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Milkyway Football Academy site renderer
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from cwd [default: milkyway.toml]
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render every configured page to the output directory
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Print the metadata tags of a page as JSON
    #[command(visible_alias = "m")]
    Meta {
        #[command(flatten)]
        args: MetaArgs,
    },

    /// Check the configuration without rendering
    #[command(visible_alias = "v")]
    Validate,
}

/// Build command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(short, long)]
    pub clean: bool,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Override the site domain used in canonical and social URLs.
    ///
    /// Example: milkyway build --site-url "https://staging.milkywayfootballacademy.com"
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Meta command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct MetaArgs {
    /// Page path, e.g. `/news`
    #[arg(default_value = "/")]
    pub path: String,

    /// Title override (defaults to the page's configured title, then the brand)
    #[arg(short, long)]
    pub title: Option<String>,

    /// Description override (defaults to the page's configured description, then empty)
    #[arg(short, long)]
    pub description: Option<String>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build() {
        let cli = Cli::try_parse_from(["milkyway", "build", "--clean", "-U", "https://example.com"])
            .unwrap();
        let Commands::Build { build_args } = cli.command else {
            panic!("expected build");
        };
        assert!(build_args.clean);
        assert_eq!(build_args.site_url.as_deref(), Some("https://example.com"));
        assert_eq!(cli.config, None);

        let cli = Cli::try_parse_from(["milkyway", "-C", "staging.toml", "validate"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("staging.toml")));
    }

    #[test]
    fn test_parse_meta_defaults() {
        let cli = Cli::try_parse_from(["milkyway", "m"]).unwrap();
        let Commands::Meta { args } = cli.command else {
            panic!("expected meta");
        };
        assert_eq!(args.path, "/");
        assert_eq!(args.title, None);
        assert!(!args.pretty);
    }

    #[test]
    fn test_parse_meta_overrides() {
        let cli = Cli::try_parse_from(["milkyway", "meta", "/news", "-t", "News", "-d", "X", "-p"])
            .unwrap();
        let Commands::Meta { args } = cli.command else {
            panic!("expected meta");
        };
        assert_eq!(args.path, "/news");
        assert_eq!(args.title.as_deref(), Some("News"));
        assert_eq!(args.description.as_deref(), Some("X"));
        assert!(args.pretty);
    }
}
