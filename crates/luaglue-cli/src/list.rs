//! List command: enumerate resource files under a bindings tree.

use crate::generate::walk_files;
use anyhow::Result;
use luaglue_core::GenError;
use std::path::Path;

/// Print every file under `dir` as a sorted relative path, one per line.
pub fn run(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        return Err(GenError::NotFound(dir.to_path_buf()).into());
    }

    for rel in walk_files(dir)? {
        println!("{}", rel.display());
    }

    Ok(())
}
