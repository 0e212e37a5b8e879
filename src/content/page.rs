//! Page types: markdown pages with metadata, raw HTML pages, and the
//! closed `Page` sum over both.

use crate::{
    config::SitePaths,
    content::{front_matter, loader::ContentFile},
    error::Result,
    markdown,
};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Kind tag for a content file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Markdown,
    Html,
}

impl ContentKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Html => "html",
        }
    }
}

/// Derive a URL-safe slug from a page title.
///
/// Pure and deterministic: lowercase, hyphenated, ASCII-normalized.
pub fn slugify_title(title: &str) -> String {
    slug::slugify(title)
}

/// A markdown content file after front-matter extraction and rendering.
///
/// Slug and destination path are computed once at parse time and never
/// change afterwards. Serialized fields are what templates see as `page`.
#[derive(Debug, Clone, Serialize)]
pub struct MarkdownPage {
    pub title: String,
    pub slug: String,
    pub category: String,
    /// Publish date, used for sorting. Posts without a date sort last.
    #[serde(skip)]
    pub date: Option<DateTime<FixedOffset>>,
    /// Human-readable date for templates, e.g. `Fri Mar 20 15:35:00 2015`
    pub formatted_date: String,
    /// Site-relative link, e.g. `posts/hello-world.html`
    pub rel_link: String,
    /// Markdown body with the header removed
    #[serde(skip)]
    pub raw_markdown: String,
    /// Rendered HTML body
    pub content: String,
    #[serde(skip)]
    pub dest: PathBuf,
}

impl MarkdownPage {
    /// Parse a post source file.
    ///
    /// The destination is `public/posts/<slug>.html`, falling back to the
    /// base filename when the title (and therefore the slug) is empty.
    pub fn post(file: &ContentFile, raw: &str, paths: &SitePaths) -> Result<Self> {
        let (meta, body) = front_matter::parse(&file.name, raw)?;
        let slug = slugify_title(&meta.title);
        let stem = if slug.is_empty() { &file.name } else { &slug };
        let dest = paths.output_posts.join(format!("{stem}.html"));
        let rel_link = format!("posts/{stem}.html");
        Ok(Self::assemble(meta, slug, body, dest, rel_link))
    }

    /// Parse a root content file.
    ///
    /// The destination was already computed by the loader from the base
    /// filename; the slug does not participate.
    pub fn page(file: &ContentFile, raw: &str) -> Result<Self> {
        let (meta, body) = front_matter::parse(&file.name, raw)?;
        let slug = slugify_title(&meta.title);
        let rel_link = format!("{}.html", file.name);
        Ok(Self::assemble(meta, slug, body, file.dest.clone(), rel_link))
    }

    fn assemble(
        meta: front_matter::PageMetadata,
        slug: String,
        body: String,
        dest: PathBuf,
        rel_link: String,
    ) -> Self {
        let formatted_date = meta
            .date
            .map(|d| d.format("%a %b %e %H:%M:%S %Y").to_string())
            .unwrap_or_default();
        let content = markdown::render(&body);
        Self {
            title: meta.title,
            slug,
            category: meta.category,
            date: meta.date,
            formatted_date,
            rel_link,
            raw_markdown: body,
            content,
            dest,
        }
    }
}

/// A raw HTML content file, passed through verbatim. No metadata.
#[derive(Debug, Clone)]
pub struct HtmlPage {
    pub raw_html: String,
    pub dest: PathBuf,
}

impl HtmlPage {
    pub fn new(file: &ContentFile, raw_html: String) -> Self {
        Self {
            raw_html,
            dest: file.dest.clone(),
        }
    }
}

/// A renderable page, markdown or raw HTML.
///
/// Closed sum so every rendering site matches exhaustively.
#[derive(Debug, Clone)]
pub enum Page {
    Markdown(MarkdownPage),
    Html(HtmlPage),
}

impl Page {
    pub const fn kind(&self) -> ContentKind {
        match self {
            Self::Markdown(_) => ContentKind::Markdown,
            Self::Html(_) => ContentKind::Html,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Markdown(page) => &page.title,
            Self::Html(_) => "",
        }
    }

    /// The HTML to splice into the page template.
    pub fn rendered_html(&self) -> &str {
        match self {
            Self::Markdown(page) => &page.content,
            Self::Html(page) => &page.raw_html,
        }
    }

    pub fn dest(&self) -> &Path {
        match self {
            Self::Markdown(page) => &page.dest,
            Self::Html(page) => &page.dest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::loader::ContentFile;

    fn post_file(name: &str) -> ContentFile {
        ContentFile {
            source: PathBuf::from(format!("content/posts/{name}.md")),
            dest: PathBuf::from(format!("public/posts/{name}.html")),
            name: name.to_owned(),
            kind: ContentKind::Markdown,
        }
    }

    fn paths() -> SitePaths {
        SitePaths::new(Path::new("."))
    }

    #[test]
    fn test_slug_is_deterministic_and_idempotent() {
        let first = slugify_title("My Great Post!");
        let second = slugify_title("My Great Post!");
        assert_eq!(first, second);
        assert_eq!(first, "my-great-post");
        // Running the slug through again changes nothing
        assert_eq!(slugify_title(&first), first);
    }

    #[test]
    fn test_slug_normalizes_to_ascii() {
        assert_eq!(slugify_title("Café Über Alles"), "cafe-uber-alles");
    }

    #[test]
    fn test_post_destination_uses_slug() {
        let raw = "###\ntitle: Hello World\n###\nbody";
        let post = MarkdownPage::post(&post_file("20150320-hello"), raw, &paths()).unwrap();

        assert_eq!(post.slug, "hello-world");
        assert_eq!(post.dest, PathBuf::from("./public/posts/hello-world.html"));
        assert_eq!(post.rel_link, "posts/hello-world.html");
    }

    #[test]
    fn test_post_without_title_falls_back_to_filename() {
        let post = MarkdownPage::post(&post_file("untitled"), "no header", &paths()).unwrap();

        assert_eq!(post.slug, "");
        assert_eq!(post.dest, PathBuf::from("./public/posts/untitled.html"));
        assert_eq!(post.rel_link, "posts/untitled.html");
    }

    #[test]
    fn test_page_keeps_loader_destination() {
        let file = ContentFile {
            source: PathBuf::from("content/about.md"),
            dest: PathBuf::from("public/about.html"),
            name: "about".to_owned(),
            kind: ContentKind::Markdown,
        };
        let page = MarkdownPage::page(&file, "###\ntitle: About Me\n###\nhi").unwrap();

        assert_eq!(page.dest, PathBuf::from("public/about.html"));
        assert_eq!(page.rel_link, "about.html");
    }

    #[test]
    fn test_markdown_body_is_rendered() {
        let post = MarkdownPage::post(&post_file("p"), "*emphasis*", &paths()).unwrap();
        assert!(post.content.contains("<em>emphasis</em>"));
        assert_eq!(post.raw_markdown, "*emphasis*");
    }

    #[test]
    fn test_page_enum_accessors() {
        let md = MarkdownPage::post(&post_file("p"), "###\ntitle: T\n###\nbody", &paths()).unwrap();
        let page = Page::Markdown(md);
        assert_eq!(page.kind(), ContentKind::Markdown);
        assert_eq!(page.title(), "T");

        let file = ContentFile {
            source: PathBuf::from("content/raw.html"),
            dest: PathBuf::from("public/raw.html"),
            name: "raw".to_owned(),
            kind: ContentKind::Html,
        };
        let html = Page::Html(HtmlPage::new(&file, "<p>verbatim</p>".to_owned()));
        assert_eq!(html.kind(), ContentKind::Html);
        assert_eq!(html.title(), "");
        assert_eq!(html.rendered_html(), "<p>verbatim</p>");
    }
}
