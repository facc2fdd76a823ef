//! Merge command implementation

use console::Style;

use crate::cli::Cli;
use crate::common::fs::{ensure_parent_dir, write_atomic};
use crate::error::Result;
use crate::manifest::{FILES, Manifest, PACKAGES, merge_manifests};

/// Load both manifests, merge them and write the result
///
/// Nothing is written unless the whole merge succeeds.
pub fn run(args: &Cli) -> Result<()> {
    let intel = Manifest::load(&args.intel_manifest)?;
    let arm = Manifest::load(&args.arm_manifest)?;

    let merged = merge_manifests(&intel, &arm)?;
    let yaml = merged.to_yaml()?;

    if args.dry_run {
        tracing::info!("dry run, not writing {}", args.output_manifest.display());
        print!("{yaml}");
        return Ok(());
    }

    ensure_parent_dir(&args.output_manifest)?;
    write_atomic(&args.output_manifest, &yaml)?;
    tracing::debug!(path = %args.output_manifest.display(), "wrote merged manifest");

    if !args.quiet {
        let green = Style::new().green().bold();
        println!(
            "{} {} ({} files, {} packages)",
            green.apply_to("Merged"),
            args.output_manifest.display(),
            entry_count(&merged, FILES.name),
            entry_count(&merged, PACKAGES.name),
        );
    }

    Ok(())
}

fn entry_count(manifest: &Manifest, field: &str) -> usize {
    manifest
        .get(field)
        .and_then(serde_yaml::Value::as_sequence)
        .map_or(0, Vec::len)
}
