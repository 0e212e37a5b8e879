//! Site configuration management.
//!
//! Handles loading the `solarwind.json` configuration file and computing
//! the fixed project directory layout once at startup.

use crate::error::{Result, SiteError};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config filename, expected at the project root.
pub const CONFIG_FILE: &str = "solarwind.json";

/// Default values for serde deserialization
pub mod config_defaults {
    pub fn site_title() -> String {
        "Solarwind Site".into()
    }

    pub fn site_description() -> String {
        "A static site generated with solarwind".into()
    }
}

/// Site-wide configuration from `solarwind.json`.
///
/// Loaded once per build and immutable for the run. Missing fields fall
/// back to fixed defaults rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title, available to templates as `site.site_title`
    #[serde(default = "config_defaults::site_title")]
    pub site_title: String,

    /// Site description, available to templates as `site.site_description`
    #[serde(default = "config_defaults::site_description")]
    pub site_description: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_title: config_defaults::site_title(),
            site_description: config_defaults::site_description(),
        }
    }
}

impl SiteConfig {
    /// Parse configuration from a JSON string.
    pub fn from_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|err| SiteError::Config(format!("invalid {CONFIG_FILE}: {err}")))
    }

    /// Load configuration from a file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|err| SiteError::Config(format!("cannot read `{}`: {err}", path.display())))?;
        Self::from_str(&content)
    }
}

/// Fixed directory layout for a project, relative to its root.
///
/// Constructed once at program entry and passed by reference into every
/// component. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct SitePaths {
    pub root: PathBuf,
    /// Root-level markdown/HTML content
    pub content: PathBuf,
    /// Post markdown files
    pub posts: PathBuf,
    /// The three template fragments: base.html, page.html, post.html
    pub templates: PathBuf,
    /// Assets copied verbatim into the output
    pub statics: PathBuf,
    /// Generated output, destroyed and rebuilt each run
    pub output: PathBuf,
    pub output_posts: PathBuf,
    pub config_file: PathBuf,
}

impl SitePaths {
    pub fn new(root: &Path) -> Self {
        let content = root.join("content");
        let output = root.join("public");
        Self {
            root: root.to_path_buf(),
            posts: content.join("posts"),
            content,
            templates: root.join("templates"),
            statics: root.join("static"),
            output_posts: output.join("posts"),
            output,
            config_file: root.join(CONFIG_FILE),
        }
    }

    /// Verify that every required source directory exists.
    ///
    /// Must be called before anything destructive touches the output tree.
    pub fn check_sources(&self) -> Result<()> {
        for dir in [&self.content, &self.posts, &self.templates] {
            if !dir.is_dir() {
                return Err(SiteError::Directory(dir.clone()));
            }
        }
        Ok(())
    }
}
