use anyhow::{bail, Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// True when `dir` is a directory with at least one entry
pub fn is_populated(dir: &Path) -> bool {
    fs::read_dir(dir)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false)
}

/// Copies the regular files directly inside `source` whose extension is
/// `extension` into `dest` (the equivalent of `cp source/*.ext dest/`).
///
/// Hidden files are skipped, as a shell glob would. `dest` is created if
/// needed. A missing or empty `source` copies nothing. Returns the destination paths in name order.
pub fn copy_matching(source: &Path, dest: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dest)
        .with_context(|| format!("Failed to create directory {}", dest.display()))?;

    let entries = match fs::read_dir(source) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", source.display()))
        }
    };

    let mut matches = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read entry in {}", source.display()))?;
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension) {
            matches.push(path);
        }
    }
    matches.sort();

    let mut copied = Vec::with_capacity(matches.len());
    for path in matches {
        let Some(name) = path.file_name() else {
            continue;
        };
        let target = dest.join(name);
        fs::copy(&path, &target).with_context(|| {
            format!("Failed to copy {} to {}", path.display(), target.display())
        })?;
        debug!(from = %path.display(), to = %target.display(), "Copied");
        copied.push(target);
    }

    Ok(copied)
}

/// Removes `path` and everything below it. Returns false when nothing was there.
pub fn remove_tree(path: &Path) -> Result<bool> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e).with_context(|| format!("Failed to inspect {}", path.display())),
    };

    if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
    .with_context(|| format!("Failed to remove {}", path.display()))?;

    Ok(true)
}

/// Recursively copies the tree at `source` to `dest`, creating `dest`.
///
/// Symlinks are followed. Returns the number of files copied.
pub fn copy_tree(source: &Path, dest: &Path) -> Result<usize> {
    if !source.is_dir() {
        bail!("Source directory {} does not exist", source.display());
    }

    let mut files = 0;
    for entry in WalkDir::new(source).follow_links(true) {
        let entry = entry.with_context(|| format!("Failed to walk {}", source.display()))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .with_context(|| format!("{} escaped {}", entry.path().display(), source.display()))?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create directory {}", target.display()))?;
        } else {
            fs::copy(entry.path(), &target).with_context(|| {
                format!(
                    "Failed to copy {} to {}",
                    entry.path().display(),
                    target.display()
                )
            })?;
            files += 1;
        }
    }

    Ok(files)
}

/// Moves `source` to `dest`, replacing an existing file at `dest`.
///
/// Falls back to copy-then-remove when a rename is not possible (e.g. across
/// devices). On any failure `dest` keeps its previous content and no
/// temporary file is left next to it.
pub fn move_replace(source: &Path, dest: &Path) -> Result<()> {
    if !source.is_file() {
        bail!("{} does not exist", source.display());
    }

    // rename replaces an existing dest atomically, Windows included
    if fs::rename(source, dest).is_ok() {
        return Ok(());
    }

    copy_into_place(source, dest)?;
    fs::remove_file(source).with_context(|| format!("Failed to remove {}", source.display()))?;

    Ok(())
}

/// Copies `source` under a hidden temporary name beside `dest`, then renames it over `dest`.
fn copy_into_place(source: &Path, dest: &Path) -> Result<()> {
    let partial = partial_path(dest);

    let staged = fs::copy(source, &partial).and_then(|_| fs::rename(&partial, dest));
    if let Err(e) = staged {
        let _ = fs::remove_file(&partial);
        return Err(e).with_context(|| {
            format!("Failed to copy {} into {}", source.display(), dest.display())
        });
    }

    Ok(())
}

fn partial_path(dest: &Path) -> PathBuf {
    let file_name = dest
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("artifact");
    dest.with_file_name(format!(".{}.partial", file_name))
}
