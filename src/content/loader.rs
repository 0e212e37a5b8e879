//! Content file discovery.
//!
//! Lists source files non-recursively and computes their destination
//! paths. Filesystem enumeration order is unspecified, so every listing
//! is sorted lexically by filename to keep builds reproducible.

use crate::{
    config::SitePaths,
    content::page::ContentKind,
    error::{Result, SiteError},
};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Extensions treated as markdown content.
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// A discovered content file with its computed destination.
///
/// Computed once and never mutated.
#[derive(Debug, Clone)]
pub struct ContentFile {
    pub source: PathBuf,
    pub dest: PathBuf,
    /// Base filename up to the first dot, e.g. `content/about.md` → `about`
    pub name: String,
    pub kind: ContentKind,
}

/// List files in `dir` with the given extension, non-recursively.
///
/// Destinations land directly in `dest_dir` as `<name>.html`. Results are
/// sorted lexically by filename.
pub fn list_files(
    dir: &Path,
    extension: &str,
    dest_dir: &Path,
    kind: ContentKind,
) -> Result<Vec<ContentFile>> {
    let entries = fs::read_dir(dir).map_err(|err| SiteError::Io(dir.to_path_buf(), err))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| SiteError::Io(dir.to_path_buf(), err))?;
        let source = entry.path();
        if !source.is_file() {
            continue;
        }
        if source.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }

        let file_name = entry.file_name();
        let name = file_name
            .to_string_lossy()
            .split('.')
            .next()
            .unwrap_or_default()
            .to_owned();
        files.push(ContentFile {
            dest: dest_dir.join(format!("{name}.html")),
            source,
            name,
            kind,
        });
    }

    files.sort_by(|a, b| a.source.cmp(&b.source));
    Ok(files)
}

/// Discover root content files: markdown first, then raw HTML.
pub fn discover_root(paths: &SitePaths) -> Result<Vec<ContentFile>> {
    let mut files = Vec::new();
    for ext in MARKDOWN_EXTENSIONS {
        files.extend(list_files(
            &paths.content,
            ext,
            &paths.output,
            ContentKind::Markdown,
        )?);
    }
    files.extend(list_files(
        &paths.content,
        "html",
        &paths.output,
        ContentKind::Html,
    )?);
    Ok(files)
}

/// Discover post markdown files.
///
/// The loader destination uses the base filename; once a post parses with
/// a non-empty title, the slug-derived destination replaces it.
pub fn discover_posts(paths: &SitePaths) -> Result<Vec<ContentFile>> {
    let mut files = Vec::new();
    for ext in MARKDOWN_EXTENSIONS {
        files.extend(list_files(
            &paths.posts,
            ext,
            &paths.output_posts,
            ContentKind::Markdown,
        )?);
    }
    Ok(files)
}
