pub mod document;
pub mod error;
pub mod io;
pub mod parsing;
pub mod render;

use log::info;

use document::{FrontMatter, PageOptions, PageParts, render_page};
use parsing::blocks::group;
use parsing::node::Child;
use parsing::rules::SyntaxKind;
use render::Renderer;
use render::external::{ExternalFiles, NoExternalFiles};

// Re-export key types for easier usage
pub use error::Error;
pub use io::{FsExternalFiles, IoError};
pub use parsing::{ParsedDoc, parse_document};

/// A converted document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Rendered blocks, without the trailing bibliography.
    pub body: String,
    /// The `<script type="text/bibliography">` block, when the document ends
    /// with a bibliography section.
    pub bibliography: Option<String>,
    pub found_note: bool,
}

/// Converts markup to an HTML body fragment. Includes get default sizing.
pub fn convert(text: &str) -> Result<Conversion, Error> {
    convert_with(text, &NoExternalFiles)
}

/// Converts markup, reading `{{path}}` includes through `files`.
pub fn convert_with(text: &str, files: &dyn ExternalFiles) -> Result<Conversion, Error> {
    let ParsedDoc {
        mut root,
        found_note,
    } = parse_document(text)?;
    info!("parsed {} top-level nodes", root.children.len());

    let renderer = Renderer::new(files);
    let ends_with_bibliography = root
        .children
        .last()
        .is_some_and(|c| c.as_node_of(SyntaxKind::Bibliography).is_some());
    let bibliography = match ends_with_bibliography.then(|| root.children.pop()).flatten() {
        Some(Child::Node(node)) => Some(renderer.render_node(&node)?.html),
        _ => None,
    };

    let body = group(root.children);
    info!("grouped into {} body members", body.members.len());
    let html = renderer.render_document(&body)?;
    info!("rendered {} bytes of HTML", html.len());

    Ok(Conversion {
        body: html,
        bibliography,
        found_note,
    })
}

/// Converts a whole source file into a standalone HTML page.
///
/// Leading front matter is split off first and feeds the page header.
pub fn convert_page(
    source: &str,
    options: &PageOptions,
    files: &dyn ExternalFiles,
) -> Result<String, Error> {
    let (front, text) = FrontMatter::extract(source)?;
    let conversion = convert_with(text, files)?;
    Ok(render_page(
        PageParts {
            front_matter: &front,
            body: &conversion.body,
            bibliography: conversion.bibliography.as_deref(),
            found_note: conversion.found_note,
        },
        options,
    ))
}

/// The grouped block tree as an indented dump, for inspection.
pub fn dump_tree(text: &str) -> Result<String, Error> {
    let (body, _) = parsing::parse_blocks(text)?;
    Ok(parsing::snapshot::normalize::dump_blocks(&body))
}
