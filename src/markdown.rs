//! Markdown rendering boundary.
//!
//! A pure wrapper over pulldown-cmark with the common GFM feature set
//! (tables, strikethrough, task lists; fenced code and autolinks come
//! with CommonMark itself). No custom extensions, no side effects.

use pulldown_cmark::{Options, Parser, html::push_html};

/// Render markdown text to HTML.
pub fn render(content: &str) -> String {
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(content, options);

    let mut html = String::with_capacity(content.len() * 2);
    push_html(&mut html, parser);
    html
}
