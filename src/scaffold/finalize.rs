use std::fs;

use anyhow::{Context, Result, bail};
use camino::{Utf8Path, Utf8PathBuf};

/// Directory name for a module: its last `/`-delimited segment.
pub fn project_dir_name(module: &str) -> Result<&str> {
    let name = module.rsplit('/').next().unwrap_or(module);
    if name.is_empty() || name == "." || name == ".." {
        bail!("module `{module}` does not end in a usable directory name");
    }
    Ok(name)
}

/// Rename `workdir/extract_dir` to the directory named after `module`.
///
/// Refuses to replace an existing path, since `rename(2)` would silently
/// swap out an empty directory. A module already named after `extract_dir`
/// needs no rename.
pub fn finalize(workdir: &Utf8Path, extract_dir: &str, module: &str) -> Result<Utf8PathBuf> {
    let name = project_dir_name(module)?;
    let from = workdir.join(extract_dir);
    let to = workdir.join(name);
    if to == from {
        return Ok(to);
    }
    if to.exists() {
        bail!("{to} already exists; refusing to overwrite it");
    }
    fs::rename(&from, &to).with_context(|| format!("renaming {from} to {to}"))?;
    Ok(to)
}
