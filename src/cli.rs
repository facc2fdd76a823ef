//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// mac-latest-merge - combine Intel and ARM latest-mac.yml manifests
///
/// Reads the auto-update manifests produced by the two macOS build jobs and
/// writes a single manifest listing the artifacts of both architectures.
#[derive(Parser, Debug)]
#[command(
    name = "mac-latest-merge",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Merge Electron latest-mac.yml manifests from Intel and ARM builds",
    long_about = "Merges the latest-mac.yml auto-update manifests of the Intel and ARM macOS \
                  builds. The files and packages lists are combined (ARM wins on duplicate \
                  entries), releaseDate takes the latest value and both versions must match. \
                  Other keys are taken from the Intel manifest only.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  mac-latest-merge intel/latest-mac.yml arm/latest-mac.yml dist/latest-mac.yml\n   \
                  mac-latest-merge intel.yml arm.yml out.yml --dry-run   \x1b[90m# Print instead of writing\x1b[0m\n"
)]
pub struct Cli {
    /// Intel latest-mac.yml path
    pub intel_manifest: PathBuf,

    /// ARM latest-mac.yml path
    pub arm_manifest: PathBuf,

    /// Merged output path (parent directories are created)
    pub output_manifest: PathBuf,

    /// Print the merged manifest to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose (debug) logging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Enable trace-level logging (more detailed than --verbose)
    #[arg(long)]
    pub trace: bool,

    /// Suppress the summary line
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_positionals() {
        let cli = Cli::try_parse_from(["mac-latest-merge", "intel.yml", "arm.yml", "out/merged.yml"])
            .unwrap();
        assert_eq!(cli.intel_manifest, PathBuf::from("intel.yml"));
        assert_eq!(cli.arm_manifest, PathBuf::from("arm.yml"));
        assert_eq!(cli.output_manifest, PathBuf::from("out/merged.yml"));
        assert!(!cli.dry_run);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "mac-latest-merge",
            "-v",
            "--dry-run",
            "-q",
            "a.yml",
            "b.yml",
            "c.yml",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(cli.dry_run);
        assert!(cli.quiet);
        assert!(!cli.trace);
    }

    #[test]
    fn test_cli_requires_three_paths() {
        assert!(Cli::try_parse_from(["mac-latest-merge", "a.yml", "b.yml"]).is_err());
        assert!(Cli::try_parse_from(["mac-latest-merge"]).is_err());
    }

    #[test]
    fn test_cli_rejects_extra_paths() {
        assert!(Cli::try_parse_from(["mac-latest-merge", "a", "b", "c", "d"]).is_err());
    }

    #[test]
    fn test_cli_debug_assert() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
