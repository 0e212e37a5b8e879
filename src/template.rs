//! Template composition.
//!
//! Combines the base layout, a per-kind partial, and rendered content
//! into final HTML. The three fragments are read from `templates/` and
//! parsed exactly once per build; a parse failure is fatal since no
//! output can safely be produced without them.
//!
//! The substitution contract exposed to templates:
//! - `site` — the [`SiteConfig`] fields
//! - `posts` — the full post list, sorted newest-first
//! - `content` — pre-rendered HTML for the file being composed
//! - `page` — the current post (post composition only)
//!
//! `page.html` and `post.html` may `{% extends "base.html" %}`.

use crate::{
    config::SiteConfig,
    content::page::MarkdownPage,
    error::{Result, SiteError},
};
use std::{fs, path::Path};
use tera::Tera;

pub const BASE_TEMPLATE: &str = "base.html";
pub const PAGE_TEMPLATE: &str = "page.html";
pub const POST_TEMPLATE: &str = "post.html";

/// Shared data available to every template execution.
///
/// Built once per run, after the post list is sorted.
pub struct BuildContext<'a> {
    pub config: &'a SiteConfig,
    pub posts: &'a [MarkdownPage],
}

/// Renders final HTML for one output file at a time.
#[derive(Debug)]
pub struct TemplateComposer {
    tera: Tera,
}

impl TemplateComposer {
    /// Load and parse the three template fragments from `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut sources = Vec::new();
        for name in [BASE_TEMPLATE, PAGE_TEMPLATE, POST_TEMPLATE] {
            let path = dir.join(name);
            let source =
                fs::read_to_string(&path).map_err(|err| SiteError::Io(path.clone(), err))?;
            sources.push((name, source));
        }

        let mut tera = Tera::default();
        tera.add_raw_templates(sources)?;
        // Content fields hold pre-rendered HTML; templates splice them in
        // unescaped, matching the verbatim pass-through contract.
        tera.autoescape_on(vec![]);
        Ok(Self { tera })
    }

    /// Compose a standalone page: base layout + page partial + content.
    pub fn compose_page(&self, ctx: &BuildContext, content: &str) -> Result<String> {
        let context = Self::base_context(ctx, content);
        Ok(self.tera.render(PAGE_TEMPLATE, &context)?)
    }

    /// Compose a post: additionally exposes the currently-rendering post
    /// as `page` for cross-linking and navigation.
    pub fn compose_post(&self, ctx: &BuildContext, post: &MarkdownPage) -> Result<String> {
        let mut context = Self::base_context(ctx, &post.content);
        context.insert("page", post);
        Ok(self.tera.render(POST_TEMPLATE, &context)?)
    }

    fn base_context(ctx: &BuildContext, content: &str) -> tera::Context {
        let mut context = tera::Context::new();
        context.insert("site", ctx.config);
        context.insert("posts", ctx.posts);
        context.insert("content", content);
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::SitePaths, content::loader::ContentFile, content::page::ContentKind};
    use std::path::PathBuf;

    const BASE: &str = "<html><head><title>{{ site.site_title }}</title></head>\
        <body>{% block main %}{% endblock main %}</body></html>";
    const PAGE: &str = "{% extends \"base.html\" %}{% block main %}\
        <main>{{ content }}</main>\
        <ul>{% for post in posts %}<li><a href=\"{{ post.rel_link }}\">{{ post.title }}</a></li>{% endfor %}</ul>\
        {% endblock main %}";
    const POST: &str = "{% extends \"base.html\" %}{% block main %}\
        <article><h1>{{ page.title }}</h1><time>{{ page.formatted_date }}</time>{{ content }}</article>\
        {% endblock main %}";

    fn composer() -> TemplateComposer {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(BASE_TEMPLATE), BASE).unwrap();
        std::fs::write(tmp.path().join(PAGE_TEMPLATE), PAGE).unwrap();
        std::fs::write(tmp.path().join(POST_TEMPLATE), POST).unwrap();
        TemplateComposer::from_dir(tmp.path()).unwrap()
    }

    fn sample_post(title: &str) -> MarkdownPage {
        let file = ContentFile {
            source: PathBuf::from("content/posts/p.md"),
            dest: PathBuf::from("public/posts/p.html"),
            name: "p".to_owned(),
            kind: ContentKind::Markdown,
        };
        let raw = format!(
            "###\ntitle: {title}\ndate: Sat, 01 Jun 2024 10:00:00 +0000\n###\nHello *world*"
        );
        MarkdownPage::post(&file, &raw, &SitePaths::new(Path::new("."))).unwrap()
    }

    fn sample_config() -> SiteConfig {
        SiteConfig {
            site_title: "Test Site".to_owned(),
            site_description: "desc".to_owned(),
        }
    }

    #[test]
    fn test_missing_template_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = TemplateComposer::from_dir(tmp.path()).unwrap_err();
        assert!(matches!(err, SiteError::Io(..)));
    }

    #[test]
    fn test_unparseable_template_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(BASE_TEMPLATE), "{% block broken %}").unwrap();
        std::fs::write(tmp.path().join(PAGE_TEMPLATE), "").unwrap();
        std::fs::write(tmp.path().join(POST_TEMPLATE), "").unwrap();

        let err = TemplateComposer::from_dir(tmp.path()).unwrap_err();
        assert!(matches!(err, SiteError::Template(_)));
    }

    #[test]
    fn test_compose_page_splices_content_and_lists_posts() {
        let composer = composer();
        let config = sample_config();
        let posts = vec![sample_post("First Post")];
        let ctx = BuildContext {
            config: &config,
            posts: &posts,
        };

        let html = composer
            .compose_page(&ctx, "<p>standalone content</p>")
            .unwrap();

        assert!(html.contains("<title>Test Site</title>"));
        assert!(html.contains("<p>standalone content</p>"));
        assert!(html.contains("<a href=\"posts/first-post.html\">First Post</a>"));
    }

    #[test]
    fn test_compose_post_exposes_current_page() {
        let composer = composer();
        let config = sample_config();
        let posts = vec![sample_post("Hello World")];
        let ctx = BuildContext {
            config: &config,
            posts: &posts,
        };

        let html = composer.compose_post(&ctx, &posts[0]).unwrap();

        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<time>Sat Jun  1 10:00:00 2024</time>"));
        assert!(html.contains("Hello <em>world</em>"));
    }

    #[test]
    fn test_undefined_variable_is_template_error() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(BASE_TEMPLATE), "").unwrap();
        std::fs::write(tmp.path().join(PAGE_TEMPLATE), "{{ missing_variable }}").unwrap();
        std::fs::write(tmp.path().join(POST_TEMPLATE), "").unwrap();
        let composer = TemplateComposer::from_dir(tmp.path()).unwrap();

        let config = sample_config();
        let ctx = BuildContext {
            config: &config,
            posts: &[],
        };
        let err = composer.compose_page(&ctx, "").unwrap_err();
        assert!(matches!(err, SiteError::Template(_)));
    }
}
