//! Extraction of the downloaded template archive.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use camino::Utf8Path;
use tracing::trace;
use zip::ZipArchive;

use crate::util::fs::{ensure_dir, set_mode};

/// Counts of entries recreated on disk.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ExtractSummary {
    pub directories: usize,
    pub files: usize,
}

/// Recreate every entry of the zip at `archive_path` under `dest_root`.
///
/// Entries are processed in archive order. Parent directories are created
/// for each file regardless of whether a directory entry preceded it, and
/// the unix mode recorded for a file is applied after its bytes are written.
/// The first failure aborts; files already written stay on disk.
pub fn extract(archive_path: &Path, dest_root: &Utf8Path) -> Result<ExtractSummary> {
    let file = File::open(archive_path)
        .with_context(|| format!("opening archive {}", archive_path.display()))?;
    let mut archive = ZipArchive::new(file)
        .with_context(|| format!("reading zip archive {}", archive_path.display()))?;

    let mut summary = ExtractSummary::default();
    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .with_context(|| format!("opening entry #{index} of {}", archive_path.display()))?;
        let relative = entry
            .enclosed_name()
            .ok_or_else(|| anyhow!("archive entry `{}` escapes the destination", entry.name()))?;
        let target = dest_root.as_std_path().join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("creating directory {}", target.display()))?;
            trace!(path = %target.display(), "created directory");
            summary.directories += 1;
            continue;
        }

        if let Some(parent) = target.parent() {
            ensure_dir(parent).with_context(|| format!("creating directory {}", parent.display()))?;
        }

        let mut out = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&target)
            .with_context(|| format!("creating {}", target.display()))?;
        io::copy(&mut entry, &mut out)
            .with_context(|| format!("extracting {}", target.display()))?;

        if let Some(mode) = entry.unix_mode() {
            set_mode(&target, mode)
                .with_context(|| format!("setting permissions on {}", target.display()))?;
        }
        trace!(path = %target.display(), "extracted file");
        summary.files += 1;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::testing::{ZipEntry, utf8_dir, write_zip};

    #[test]
    fn recreates_files_and_directories() {
        let temp = tempfile::tempdir().unwrap();
        let archive = temp.path().join("template.zip");
        write_zip(
            &archive,
            &[
                ZipEntry::dir("template-master/"),
                ZipEntry::file(
                    "template-master/go.mod",
                    b"module github.com/go-jimu/template\n",
                    0o644,
                ),
                ZipEntry::dir("template-master/cmd/"),
                ZipEntry::file("template-master/cmd/main.go", b"package main\n", 0o644),
            ],
        );
        let out = utf8_dir(&temp.path().join("out"));

        let summary = extract(&archive, &out).unwrap();

        assert_eq!(summary, ExtractSummary { directories: 2, files: 2 });
        assert_eq!(
            fs::read(out.join("template-master/go.mod")).unwrap(),
            b"module github.com/go-jimu/template\n"
        );
        assert_eq!(fs::read(out.join("template-master/cmd/main.go")).unwrap(), b"package main\n");
    }

    #[test]
    fn creates_parents_without_directory_entries() {
        let temp = tempfile::tempdir().unwrap();
        let archive = temp.path().join("template.zip");
        write_zip(
            &archive,
            &[
                ZipEntry::file("template-master/internal/app/app.go", b"package app\n", 0o644),
                ZipEntry::dir("template-master/internal/"),
            ],
        );
        let out = utf8_dir(&temp.path().join("out"));

        let summary = extract(&archive, &out).unwrap();

        assert_eq!(summary.files, 1);
        assert_eq!(
            fs::read(out.join("template-master/internal/app/app.go")).unwrap(),
            b"package app\n"
        );
    }

    #[cfg(unix)]
    #[test]
    fn applies_recorded_file_modes() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::tempdir().unwrap();
        let archive = temp.path().join("template.zip");
        write_zip(
            &archive,
            &[
                ZipEntry::file("template-master/scripts/build.sh", b"#!/bin/sh\n", 0o755),
                ZipEntry::file("template-master/README.md", b"# template\n", 0o600),
            ],
        );
        let out = utf8_dir(&temp.path().join("out"));

        extract(&archive, &out).unwrap();

        let mode = |rel: &str| {
            fs::metadata(out.join(rel)).unwrap().permissions().mode() & 0o777
        };
        assert_eq!(mode("template-master/scripts/build.sh"), 0o755);
        assert_eq!(mode("template-master/README.md"), 0o600);
    }

    #[test]
    fn overwrites_existing_files() {
        let temp = tempfile::tempdir().unwrap();
        let archive = temp.path().join("template.zip");
        write_zip(&archive, &[ZipEntry::file("template-master/a.txt", b"new", 0o644)]);
        let out = utf8_dir(&temp.path().join("out"));
        fs::create_dir_all(out.join("template-master")).unwrap();
        fs::write(out.join("template-master/a.txt"), b"much longer old content").unwrap();

        extract(&archive, &out).unwrap();

        assert_eq!(fs::read(out.join("template-master/a.txt")).unwrap(), b"new");
    }

    #[test]
    fn rejects_entries_escaping_destination() {
        let temp = tempfile::tempdir().unwrap();
        let archive = temp.path().join("evil.zip");
        write_zip(&archive, &[ZipEntry::file("../evil.txt", b"boom", 0o644)]);
        let out = utf8_dir(&temp.path().join("out"));

        let err = extract(&archive, &out).unwrap_err();

        assert!(err.to_string().contains("escapes the destination"));
        assert!(!temp.path().join("evil.txt").exists());
    }

    #[test]
    fn fails_on_non_zip_input() {
        let temp = tempfile::tempdir().unwrap();
        let archive = temp.path().join("broken.zip");
        fs::write(&archive, b"<html>not a zip</html>").unwrap();
        let out = utf8_dir(temp.path());

        let err = extract(&archive, &out).unwrap_err();
        assert!(err.to_string().contains("reading zip archive"));
    }

    #[test]
    fn fails_on_missing_archive() {
        let temp = tempfile::tempdir().unwrap();
        let out = utf8_dir(temp.path());
        let err = extract(&temp.path().join("absent.zip"), &out).unwrap_err();
        assert!(err.to_string().contains("opening archive"));
    }
}
