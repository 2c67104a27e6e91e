//! # Rendering
//!
//! Post-order walk over nodes and blocks producing HTML.
//!
//! Modifier children never produce visible text. Their attribute text is
//! collected and spliced into the opening tag of the nearest construct that
//! has one; a construct without a tag (math, plain text) passes the
//! attributes up to its parent instead.
//!
//! ## Modules
//!
//! - **`fragment`**: `Fragment` (packed HTML plus opening-tag position) and
//!   `Rendered` (HTML plus unabsorbed attributes)
//! - **`pack`**: the per-kind packing function
//! - **`external`**: `{{path}}` includes and the `ExternalFiles` seam

pub mod external;
pub mod fragment;
pub mod pack;

use log::debug;

use crate::error::Error;
use crate::parsing::blocks::{Block, BlockKind, Member};
use crate::parsing::node::{Child, Node};

use external::{ExternalFiles, NoExternalFiles};
use fragment::{Fragment, Rendered, push_attrs};

/// Renders nodes and blocks, resolving includes through `files`.
pub struct Renderer<'f> {
    files: &'f dyn ExternalFiles,
}

impl Default for Renderer<'static> {
    fn default() -> Self {
        Self {
            files: &NoExternalFiles,
        }
    }
}

impl<'f> Renderer<'f> {
    pub fn new(files: &'f dyn ExternalFiles) -> Self {
        Self { files }
    }

    /// Renders the grouped document. Attributes reaching the body are dropped.
    pub fn render_document(&self, body: &Block) -> Result<String, Error> {
        let rendered = self.render_block(body)?;
        if !rendered.attrs.is_empty() {
            debug!("dropping modifier attributes with no enclosing tag: {:?}", rendered.attrs);
        }
        Ok(rendered.html)
    }

    /// Renders `before + members + after`, injecting into `before`'s tag.
    pub fn render_block(&self, block: &Block) -> Result<Rendered, Error> {
        let mut html = String::new();
        let mut attrs = String::new();
        for member in &block.members {
            let inner = match member {
                Member::Child(child) => self.render_child(child, &mut attrs)?,
                Member::Block(nested) => {
                    let r = self.render_block(nested)?;
                    push_attrs(&mut attrs, &r.attrs);
                    r.html
                }
            };
            html.push_str(&inner);
        }

        let mut fragment = if block.kind == BlockKind::Body {
            Fragment::text(html)
        } else {
            Fragment::element(
                "\n",
                block.kind.before().trim_start_matches('\n'),
                &html,
                block.kind.after(),
            )
        };
        Ok(finish(&mut fragment, attrs, true))
    }

    /// Renders one node: children first, then the kind's packing.
    pub fn render_node(&self, node: &Node) -> Result<Rendered, Error> {
        let mut text = String::new();
        let mut attrs = String::new();
        for child in &node.children {
            text.push_str(&self.render_child(child, &mut attrs)?);
        }
        let mut fragment = pack::pack(node, &text, self.files)?;
        let accepts = node.kind.rule().accepts_modifiers;
        Ok(finish(&mut fragment, attrs, accepts))
    }

    /// Visible HTML of a child; modifier text goes to `attrs`.
    fn render_child(&self, child: &Child, attrs: &mut String) -> Result<String, Error> {
        match child {
            Child::Text(text) => Ok(text.clone()),
            Child::Modifier(modifier) => {
                push_attrs(attrs, &modifier.text());
                Ok(String::new())
            }
            Child::Node(node) => {
                let r = self.render_node(node)?;
                push_attrs(attrs, &r.attrs);
                Ok(r.html)
            }
        }
    }
}

fn finish(fragment: &mut Fragment, attrs: String, accepts: bool) -> Rendered {
    if attrs.is_empty() || (accepts && fragment.inject(&attrs)) {
        return Rendered {
            html: std::mem::take(&mut fragment.html),
            attrs: String::new(),
        };
    }
    Rendered {
        html: std::mem::take(&mut fragment.html),
        attrs,
    }
}
