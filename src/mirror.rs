//! Mirrored-path derivation and the ordered validation/copy pipeline.
//!
//! The destination file is a pure function of the destination directory
//! and the canonical source path: the source file's directory, stripped
//! of its root or drive marker, becomes a relative subtree under the
//! destination. Files from different locations therefore never collide
//! by name, and re-runs with overwrite enabled are idempotent.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::cli::args::Config;
use crate::cli::output::Reporter;
use crate::errors::{CopyError, CopyResult};
use crate::util::path::PathExt;

/// Resolved copy: the canonical source and the fully derived destination
/// file, with every required directory already created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyPlan {
    pub source: PathBuf,
    pub dest_file: PathBuf,
}

/// Validate preconditions and derive the destination, in order; the first
/// failure wins. Nothing has been copied yet at any failure point, so no
/// rollback is needed (directories already created are left in place).
pub fn plan(config: &Config, report: &Reporter) -> CopyResult<CopyPlan> {
    if !config.source.is_file() {
        return Err(CopyError::SourceNotFound(config.source.clone()));
    }
    report.debug(&format!(
        "Source file found: [{}]",
        config.source.display()
    ));

    if config.dest_dir.is_dir() {
        report.debug(&format!(
            "Destination directory exists: [{}]",
            config.dest_dir.display()
        ));
    } else {
        report.debug(&format!(
            "Destination directory not found: [{}] Creating...",
            config.dest_dir.display()
        ));
        fs::create_dir_all(&config.dest_dir).map_err(|e| CopyError::CreateDir {
            path: config.dest_dir.clone(),
            source: e,
        })?;
        report.debug(&format!(
            "Destination directory created: [{}]",
            config.dest_dir.display()
        ));
    }

    let source = config.source.to_canonical()?;
    let dest_root = config.dest_dir.to_canonical()?;
    report.debug(&format!("Source file path: {}", source.display()));
    report.debug(&format!("Destination directory: {}", dest_root.display()));

    let file_name = source
        .file_name()
        .ok_or_else(|| {
            CopyError::Internal(format!("source path has no file name: {}", source.display()))
        })?
        .to_os_string();

    let subpath = source
        .parent()
        .map(mirrored_subpath)
        .unwrap_or_default();
    report.debug(&format!("Mirrored subpath: [{}]", subpath.display()));

    let dest_dir = dest_root.join(subpath);
    if !dest_dir.is_dir() {
        fs::create_dir_all(&dest_dir).map_err(|e| CopyError::CreateDir {
            path: dest_dir.clone(),
            source: e,
        })?;
        report.debug(&format!(
            "Destination directory created: [{}]",
            dest_dir.display()
        ));
    }

    let dest_file = dest_dir.join(file_name);
    report.debug(&format!(
        "Final destination file: [{}]",
        dest_file.display()
    ));

    if dest_file.exists() && !config.overwrite {
        return Err(CopyError::DestinationExists(dest_file));
    }

    Ok(CopyPlan { source, dest_file })
}

/// Strip every root and prefix component (`/`, a Windows drive or UNC
/// prefix) from a directory path, leaving a subtree that is always
/// relative and can be appended under any destination.
pub fn mirrored_subpath(dir: &Path) -> PathBuf {
    dir.components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect()
}

/// Byte copy of the planned source to the planned destination. Without
/// overwrite the destination is opened create-new, so a file appearing
/// after the existence check still cannot be clobbered.
pub fn copy(plan: &CopyPlan, overwrite: bool) -> CopyResult<u64> {
    let mut reader = File::open(&plan.source).map_err(classify)?;

    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    let mut writer = options.open(&plan.dest_file).map_err(classify)?;

    io::copy(&mut reader, &mut writer).map_err(classify)
}

// Everything the OS reports with a concrete kind counts as I/O; only
// uncategorized errors fall through to the generic copy failure.
fn classify(err: io::Error) -> CopyError {
    if matches!(err.kind(), io::ErrorKind::Other) {
        CopyError::Internal(err.to_string())
    } else {
        CopyError::CopyIo(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrored_subpath_strips_the_root() {
        assert_eq!(
            mirrored_subpath(Path::new("/home/user/data")),
            PathBuf::from("home/user/data")
        );
    }

    #[test]
    fn mirrored_subpath_keeps_relative_paths() {
        assert_eq!(
            mirrored_subpath(Path::new("home/user/data")),
            PathBuf::from("home/user/data")
        );
    }

    #[test]
    fn mirrored_subpath_never_has_a_root() {
        assert!(!mirrored_subpath(Path::new("/var/log")).has_root());
        assert!(!mirrored_subpath(Path::new("/")).has_root());
    }

    #[cfg(windows)]
    #[test]
    fn mirrored_subpath_strips_the_drive_prefix() {
        assert_eq!(
            mirrored_subpath(Path::new(r"C:\data\reports")),
            PathBuf::from(r"data\reports")
        );
    }
}
