//! Error taxonomy for the whole pipeline.
//!
//! Every component returns `SiteError` upward; only the caller decides
//! policy. One-shot builds abort on the first error, watch mode logs it
//! and keeps serving the last successful build.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("config error: {0}")]
    Config(String),

    #[error("required directory missing: `{0}`")]
    Directory(PathBuf),

    #[error("parse error in `{file}`: {message}")]
    Parse { file: String, message: String },

    #[error("template error")]
    Template(#[from] tera::Error),

    #[error("IO error on `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("file watcher error")]
    Watch(#[from] notify::Error),
}

impl SiteError {
    /// Shorthand for a parse failure tied to a source file.
    pub fn parse(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            file: file.into(),
            message: message.into(),
        }
    }
}

pub type Result<T, E = SiteError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_error_display() {
        let io_err = SiteError::Io(
            PathBuf::from("public/index.html"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("public/index.html"));

        let parse_err = SiteError::parse("posts/hello.md", "malformed header");
        let display = format!("{parse_err}");
        assert!(display.contains("posts/hello.md"));
        assert!(display.contains("malformed header"));
    }

    #[test]
    fn test_directory_error_display() {
        let err = SiteError::Directory(PathBuf::from("content/posts"));
        assert!(format!("{err}").contains("content/posts"));
    }
}
