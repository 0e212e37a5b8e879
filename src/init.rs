//! Site initialization.
//!
//! Creates a new site skeleton: the source directory layout, a default
//! configuration file, starter templates, and a sample post.

use crate::config::{CONFIG_FILE, SiteConfig, SitePaths};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Default site directory structure
const SITE_DIRS: &[&str] = &["content", "content/posts", "templates", "static/css"];

const BASE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>{{ site.site_title }}</title>
    <link rel="stylesheet" href="/static/css/site.css">
</head>
<body>
    <header>
        <h1>{{ site.site_title }}</h1>
        <p>{{ site.site_description }}</p>
    </header>
    {% block main %}{% endblock main %}
</body>
</html>
"#;

const PAGE_TEMPLATE: &str = r#"{% extends "base.html" %}
{% block main %}
<main>
{{ content }}
</main>
<ul class="posts">
{% for post in posts %}
    <li><a href="/{{ post.rel_link }}">{{ post.title }}</a> <time>{{ post.formatted_date }}</time></li>
{% endfor %}
</ul>
{% endblock main %}
"#;

const POST_TEMPLATE: &str = r#"{% extends "base.html" %}
{% block main %}
<article>
    <h2>{{ page.title }}</h2>
    <p><time>{{ page.formatted_date }}</time> — {{ page.category }}</p>
    {{ content }}
</article>
{% endblock main %}
"#;

const SAMPLE_INDEX: &str = "# Welcome\n\nThis site was generated with solarwind.\n";

const SAMPLE_POST: &str = "###\n\
title: Hello World\n\
date: Fri, 20 Mar 2015 15:35:00 -0700\n\
category: meta\n\
###\n\
This is your first post. Edit `content/posts/hello-world.md` to change it.\n";

/// Create a new site skeleton under `root` (or `root/<name>`).
pub fn new_site(root: &Path, name: Option<&Path>) -> Result<()> {
    let root = match name {
        Some(name) => root.join(name),
        None => root.to_path_buf(),
    };

    // If no name was provided (init in current dir), the directory must
    // be completely empty
    if name.is_none() && !is_dir_empty(&root)? {
        bail!(
            "Current directory is not empty. Use `solarwind init <SITE_NAME>` to create in a subdirectory."
        );
    }
    if name.is_some() && root.exists() {
        bail!("Path `{}` already exists.", root.display());
    }

    init_site_structure(&root)?;
    init_default_config(&root)?;
    init_starter_content(&SitePaths::new(&root))?;

    crate::log!("init"; "created new site at `{}`", root.display());
    Ok(())
}

/// Check if a directory is completely empty
fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

/// Create site directory structure
fn init_site_structure(root: &Path) -> Result<()> {
    for dir in SITE_DIRS {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
    }
    Ok(())
}

/// Write default configuration file
fn init_default_config(root: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(&SiteConfig::default())?;
    fs::write(root.join(CONFIG_FILE), content)?;
    Ok(())
}

/// Write starter templates and sample content
fn init_starter_content(paths: &SitePaths) -> Result<()> {
    fs::write(paths.templates.join("base.html"), BASE_TEMPLATE)?;
    fs::write(paths.templates.join("page.html"), PAGE_TEMPLATE)?;
    fs::write(paths.templates.join("post.html"), POST_TEMPLATE)?;
    fs::write(paths.content.join("index.md"), SAMPLE_INDEX)?;
    fs::write(paths.posts.join("hello-world.md"), SAMPLE_POST)?;
    fs::write(paths.statics.join("css/site.css"), "body { margin: 2em auto; max-width: 42em; }\n")?;
    Ok(())
}
