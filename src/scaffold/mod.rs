pub mod extract;
pub mod fetch;
pub mod finalize;
pub mod render;

use std::path::Path;

use anyhow::Result;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::info;

use crate::config::ScaffoldConfig;
use crate::settings::ProjectSettings;

use self::fetch::ArchiveSource;

/// Download, extract, render and rename the template for `settings`.
///
/// Each phase runs to completion before the next starts and the first error
/// ends the run. Returns the path of the finished project directory.
pub fn scaffold<S>(
    config: &ScaffoldConfig,
    source: &S,
    workdir: &Utf8Path,
    temp_dir: &Path,
    settings: &ProjectSettings,
) -> Result<Utf8PathBuf>
where
    S: ArchiveSource + ?Sized,
{
    info!(url = %config.template_url, "downloading template");
    let archive = fetch::fetch_template(source, &config.template_url, temp_dir)?;
    info!(archive = %archive.display(), "template downloaded");

    info!(dest = %workdir, "extracting template archive");
    let extracted = extract::extract(&archive, workdir)?;
    info!(
        files = extracted.files,
        directories = extracted.directories,
        "template extracted"
    );

    let root = workdir.join(&config.extract_dir);
    info!(root = %root, "rendering template");
    let rendered = render::render_tree(&root, settings, config)?;
    info!(
        files = rendered.files,
        rewritten = rendered.rewritten,
        "template rendered"
    );

    let project = finalize::finalize(workdir, &config.extract_dir, settings.module())?;
    info!(project = %project, "project directory renamed");
    Ok(project)
}
