//! Static asset copying.
//!
//! A verbatim file-tree copy from `static/` into the output. Runs after
//! all content writes so a rebuild can never wipe freshly copied assets.

use crate::error::{Result, SiteError};
use std::{fs, path::Path};
use walkdir::WalkDir;

/// Copy `source` recursively into `dest`, creating `dest` first.
///
/// A missing source tree is not an error; the destination directory is
/// still created so the output layout stays uniform.
pub fn copy_tree(source: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest).map_err(|err| SiteError::Io(dest.to_path_buf(), err))?;
    if !source.is_dir() {
        return Ok(());
    }

    for entry in WalkDir::new(source).min_depth(1) {
        let entry = entry.map_err(|err| SiteError::Io(source.to_path_buf(), err.into()))?;
        let rel = entry.path().strip_prefix(source).unwrap_or(entry.path());
        let target = dest.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|err| SiteError::Io(target.clone(), err))?;
        } else {
            fs::copy(entry.path(), &target)
                .map_err(|err| SiteError::Io(target.clone(), err))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_tree_verbatim() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("static");
        let dest = tmp.path().join("public/static");
        fs::create_dir_all(source.join("css")).unwrap();
        fs::write(source.join("css/site.css"), "body {}").unwrap();
        fs::write(source.join("favicon.ico"), [0u8, 1, 2]).unwrap();

        copy_tree(&source, &dest).unwrap();

        assert_eq!(
            fs::read_to_string(dest.join("css/site.css")).unwrap(),
            "body {}"
        );
        assert_eq!(fs::read(dest.join("favicon.ico")).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_copy_tree_missing_source_creates_empty_dest() {
        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("public/static");

        copy_tree(&tmp.path().join("static"), &dest).unwrap();

        assert!(dest.is_dir());
        assert_eq!(fs::read_dir(&dest).unwrap().count(), 0);
    }
}
