//! Batch driver: transform or copy a bindings tree into an output tree.
//!
//! Schema documents are rendered through the core emitters with their
//! extension swapped for the active format; every other file is copied
//! byte-for-byte to the mirrored path. Generation is deterministic, so a
//! re-run over unchanged inputs reproduces the output tree exactly.

use anyhow::{Context, Result};
use luaglue_core::{ClassDef, Format, GenError};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of schema documents recognized as transformable.
pub const SCHEMA_EXT: &str = "yaml";

/// One generation run, as resolved from the command line.
pub struct Options {
    /// Root of the schema document tree
    pub bindings_dir: PathBuf,

    /// Output format
    pub format: Format,

    /// Output root; `None` with a single input file prints to stdout
    pub out: Option<PathBuf>,

    /// Shared library name handed to the wrapper emitter
    pub library: String,

    /// Explicit inputs; empty means the whole bindings tree
    pub files: Vec<PathBuf>,
}

/// Run the generate command.
pub fn run(options: &Options) -> Result<()> {
    match options.files.as_slice() {
        [] => mirror_tree(&options.bindings_dir, options),
        [single] if single.is_dir() => mirror_tree(single, options),
        files => batch_files(files, options),
    }
}

/// Mirror every file under `root` into the output root, transforming
/// schema documents and copying the rest.
fn mirror_tree(root: &Path, options: &Options) -> Result<()> {
    if !root.is_dir() {
        return Err(GenError::NotFound(root.to_path_buf()).into());
    }

    let out = options
        .out
        .as_deref()
        .context("--out is required when processing a directory tree")?;
    ensure_output_root(out)?;

    for rel in walk_files(root)? {
        let source = root.join(&rel);
        if is_schema_file(&source) {
            let text = transform(&source, options)?;
            let dest = out.join(&rel).with_extension(options.format.extension());
            write_output(&dest, &text)?;
            tracing::info!(source = %source.display(), dest = %dest.display(), "generated");
        } else {
            let dest = out.join(&rel);
            copy_file(&source, &dest)?;
            tracing::debug!(source = %source.display(), dest = %dest.display(), "copied");
        }
    }

    Ok(())
}

/// Transform exactly the named schema documents.
fn batch_files(files: &[PathBuf], options: &Options) -> Result<()> {
    for file in files {
        if !file.is_file() {
            return Err(GenError::NotFound(file.clone()).into());
        }

        let text = transform(file, options)?;
        match &options.out {
            None => print!("{text}"),
            Some(out) => {
                ensure_output_root(out)?;
                let rel = match file.strip_prefix(&options.bindings_dir) {
                    Ok(rel) => rel.to_path_buf(),
                    Err(_) => PathBuf::from(file.file_name().unwrap_or(file.as_os_str())),
                };
                let dest = out.join(rel).with_extension(options.format.extension());
                write_output(&dest, &text)?;
                tracing::info!(source = %file.display(), dest = %dest.display(), "generated");
            }
        }
    }

    Ok(())
}

/// Load one schema document and render it to the active format.
fn transform(path: &Path, options: &Options) -> Result<String> {
    let class = ClassDef::from_file(path)
        .with_context(|| format!("Failed to load schema document: {}", path.display()))?;

    let text = luaglue_core::generate(&class, options.format, &options.library)?;
    Ok(text)
}

/// Relative paths of every file under `root`, sorted for deterministic
/// traversal and stable `list` output.
pub fn walk_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_files(root, root, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_files(root: &Path, dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(root, &path, files)?;
        } else if let Ok(rel) = path.strip_prefix(root) {
            files.push(rel.to_path_buf());
        }
    }

    Ok(())
}

fn is_schema_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SCHEMA_EXT)
}

/// Reject an output root that exists as something other than a directory.
fn ensure_output_root(out: &Path) -> Result<()> {
    if out.exists() && !out.is_dir() {
        return Err(GenError::NotADirectory(out.to_path_buf()).into());
    }

    Ok(())
}

fn write_output(dest: &Path, text: &str) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(dest, text).with_context(|| format!("Failed to write {}", dest.display()))
}

fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::copy(source, dest)
        .map(|_| ())
        .with_context(|| format!("Failed to copy {} to {}", source.display(), dest.display()))
}
