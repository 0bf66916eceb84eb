//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// TypeScript API surface extractor
#[derive(Parser, Debug)]
#[command(name = "api-surface")]
#[command(about = "Extracts the exported API surface of TypeScript packages as JSON records")]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Root of a package tree; each <root>/<package>/index.ts becomes a module
    #[arg(value_name = "ROOT", required_unless_present = "entry")]
    pub root: Option<PathBuf>,

    /// Explicit entry-point file(s), bypassing package discovery
    #[arg(short, long, value_name = "FILE")]
    pub entry: Vec<PathBuf>,

    /// Write the JSON payload to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Show verbose progress on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_positional() {
        let cli = Cli::parse_from(["api-surface", "packages"]);
        assert_eq!(cli.root, Some(PathBuf::from("packages")));
        assert!(cli.entry.is_empty());
    }

    #[test]
    fn test_explicit_entries_without_root() {
        let cli = Cli::parse_from(["api-surface", "--entry", "a/index.ts", "--entry", "b/index.ts"]);
        assert!(cli.root.is_none());
        assert_eq!(cli.entry.len(), 2);
    }

    #[test]
    fn test_requires_root_or_entry() {
        assert!(Cli::try_parse_from(["api-surface"]).is_err());
    }
}
