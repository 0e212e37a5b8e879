//! Front-matter extraction.
//!
//! A content file may start with an optional metadata header delimited by
//! two `###` marker lines:
//!
//! ```text
//! ###
//! title: this is a post title
//! date: Fri, 20 Mar 2015 15:35:00 -0700
//! category: computers
//! ###
//! ```
//!
//! Every line between the markers must be a `key: value` pair. Recognized
//! keys are `title`, `date` (RFC 2822 with zone) and `category`; unknown
//! keys are ignored. Content without an opening marker is passed through
//! untouched with default metadata.

use crate::error::{Result, SiteError};
use chrono::{DateTime, FixedOffset};

/// Header delimiter line.
pub const MARKER: &str = "###";

/// Metadata extracted from a front-matter header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMetadata {
    pub title: String,
    pub date: Option<DateTime<FixedOffset>>,
    pub category: String,
}

/// Split `raw` into metadata and the body with the header removed.
///
/// `file` is only used in error messages.
///
/// Errors: a header that never reaches its closing marker, an interior
/// line without a colon, or an unparseable date.
pub fn parse(file: &str, raw: &str) -> Result<(PageMetadata, String)> {
    let mut meta = PageMetadata::default();
    let lines: Vec<&str> = raw.split('\n').collect();

    if lines.first().map(|l| l.trim_end_matches('\r')) != Some(MARKER) {
        return Ok((meta, raw.to_owned()));
    }

    let mut body_start = None;
    for (idx, line) in lines.iter().enumerate().skip(1) {
        let line = line.trim_end_matches('\r');
        if line == MARKER {
            body_start = Some(idx + 1);
            break;
        }

        let Some((key, value)) = line.split_once(':') else {
            return Err(SiteError::parse(
                file,
                format!("header line `{line}` is not a `key: value` pair"),
            ));
        };
        let value = value.trim();

        match key.trim() {
            "title" => meta.title = value.to_owned(),
            "date" => {
                let date = DateTime::parse_from_rfc2822(value).map_err(|err| {
                    SiteError::parse(file, format!("malformed date `{value}`: {err}"))
                })?;
                meta.date = Some(date);
            }
            "category" => meta.category = value.to_owned(),
            // Just ignore keys we don't know about
            _ => {}
        }
    }

    let Some(body_start) = body_start else {
        return Err(SiteError::parse(
            file,
            "malformed header, reached end of input without closing marker",
        ));
    };

    Ok((meta, lines[body_start..].join("\n")))
}
