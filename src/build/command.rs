use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::info;

use crate::config::IconsetConfig;
use crate::generate::Generator;
use crate::inject::HeadInjector;
use crate::input::{resolve_input, source_label};
use crate::path::normalize_location;
use crate::refusal::RefusalEnvelope;
use crate::report::BuildReport;
use crate::write::write_artifacts;

/// Execute the full `iconset build` flow.
///
/// Steps:
/// 1. Resolve the configured input into a total per-platform mapping
/// 2. Run the generator once
/// 3. Normalize the configured path (or URL path) into the destination under `out_root`
/// 4. Write images and files as two concurrent batches
/// 5. Summarize the written records
pub async fn execute_build<G: Generator + ?Sized>(
    generator: &G,
    config: &IconsetConfig,
    out_root: &Path,
) -> Result<BuildResult, Box<RefusalEnvelope>> {
    let started = Instant::now();

    // 1. Resolve
    let input = resolve_input(config.input.as_ref());
    let label = source_label(&input);
    info!(source = %label, "generating favicons");

    // 2. Generate
    let response = generator
        .generate(&input, config)
        .await
        .map_err(|e| Box::new(e.to_refusal()))?;

    // 3. Destination (a URL keeps only its path component)
    let rel = normalize_location(Some(&config.path));
    let dest = out_root.join(&rel);

    // 4. Write
    let (images, files) = futures::try_join!(
        write_artifacts(&response.images, &dest),
        write_artifacts(&response.files, &dest),
    )
    .map_err(|e| Box::new(e.to_refusal()))?;

    // 5. Report
    let total_elapsed_secs = started.elapsed().as_secs_f64();
    let report = BuildReport::new(
        label,
        dest.display().to_string(),
        rel,
        images,
        files,
        response.html,
        total_elapsed_secs,
    );
    info!(
        files = report.file_count(),
        elapsed_secs = total_elapsed_secs,
        "build complete"
    );

    Ok(BuildResult {
        output_dir: dest,
        report,
    })
}

/// Result of a successful build.
#[derive(Debug)]
pub struct BuildResult {
    pub output_dir: PathBuf,
    pub report: BuildReport,
}

/// Run the generator and splice its tags into `document`.
///
/// Nothing is written to disk; only the HTML tags are used.
pub async fn execute_inject<G: Generator + ?Sized>(
    generator: &G,
    config: &IconsetConfig,
    document: &str,
    compact: bool,
) -> Result<String, Box<RefusalEnvelope>> {
    let input = resolve_input(config.input.as_ref());
    let response = generator
        .generate(&input, config)
        .await
        .map_err(|e| Box::new(e.to_refusal()))?;

    let injector = HeadInjector::new(&response.html, compact);
    Ok(injector.transform(document))
}
