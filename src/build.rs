//! Site building orchestration.
//!
//! Coordinates the full content pipeline: discover source files, extract
//! front matter, render markdown, compose templates, write the output
//! tree, copy static assets.
//!
//! Every prerequisite (source directories, config, templates) is
//! validated before the previous output tree is destroyed, so a broken
//! template can never cost the last good build. A failure later in the
//! pipeline still leaves the tree partially built; one-shot mode aborts,
//! watch mode logs and keeps serving.

use crate::{
    assets,
    config::{SiteConfig, SitePaths},
    content::{
        loader,
        page::{ContentKind, HtmlPage, MarkdownPage, Page},
    },
    error::{Result, SiteError},
    log,
    template::{BuildContext, TemplateComposer},
};
use std::{collections::HashMap, fs, path::Path};

/// Build the entire site, sequentially.
pub fn build_site(paths: &SitePaths) -> Result<()> {
    // Prerequisites before anything destructive
    paths.check_sources()?;
    if !paths.config_file.is_file() {
        return Err(SiteError::Config(format!(
            "`{}` not found; create one in the project root",
            paths.config_file.display()
        )));
    }
    let config = SiteConfig::from_path(&paths.config_file)?;

    log!("build"; "caching templates");
    let composer = TemplateComposer::from_dir(&paths.templates)?;

    log!("build"; "collecting content");
    let root_files = loader::discover_root(paths)?;
    let post_files = loader::discover_posts(paths)?;
    log!("build"; "found {} files", root_files.len() + post_files.len());

    reset_output(paths)?;

    log!("build"; "parsing posts");
    let mut posts = Vec::with_capacity(post_files.len());
    for file in &post_files {
        let raw = read_source(&file.source)?;
        posts.push(MarkdownPage::post(file, &raw, paths)?);
    }
    check_slug_collisions(&posts)?;
    // Newest first; dateless posts sort last, ties keep filename order
    posts.sort_by(|a, b| b.date.cmp(&a.date));

    let ctx = BuildContext {
        config: &config,
        posts: &posts,
    };

    log!("build"; "rendering {} pages", root_files.len());
    for file in &root_files {
        log!("build"; "parsing {} ({})", file.name, file.kind.as_str());
        let raw = read_source(&file.source)?;
        let page = match file.kind {
            ContentKind::Markdown => Page::Markdown(MarkdownPage::page(file, &raw)?),
            ContentKind::Html => Page::Html(HtmlPage::new(file, raw)),
        };
        let html = composer.compose_page(&ctx, page.rendered_html())?;
        write_output(page.dest(), &html)?;
    }

    log!("build"; "rendering {} posts", posts.len());
    for post in &posts {
        let html = composer.compose_post(&ctx, post)?;
        write_output(&post.dest, &html)?;
    }

    log!("build"; "copying static assets");
    assets::copy_tree(&paths.statics, &paths.output.join("static"))?;

    log!("build"; "done");
    Ok(())
}

/// Destroy and recreate the output tree, including its posts subdirectory.
fn reset_output(paths: &SitePaths) -> Result<()> {
    if paths.output.exists() {
        fs::remove_dir_all(&paths.output)
            .map_err(|err| SiteError::Io(paths.output.clone(), err))?;
    }
    fs::create_dir_all(&paths.output_posts)
        .map_err(|err| SiteError::Io(paths.output_posts.clone(), err))
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| SiteError::Io(path.to_path_buf(), err))
}

fn write_output(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html).map_err(|err| SiteError::Io(path.to_path_buf(), err))
}

/// Two distinct titles can normalize to the same slug; refuse to build
/// rather than let the last writer silently win.
fn check_slug_collisions(posts: &[MarkdownPage]) -> Result<()> {
    let mut seen: HashMap<&Path, &str> = HashMap::new();
    for post in posts {
        if let Some(previous) = seen.insert(post.dest.as_path(), post.title.as_str()) {
            return Err(SiteError::parse(
                post.title.clone(),
                format!(
                    "slug collision: `{}` and `{previous}` both map to `{}`",
                    post.title,
                    post.dest.display()
                ),
            ));
        }
    }
    Ok(())
}
