//! Output packing: one pure function per kind, dispatched by `match`.
//!
//! `text` is the node's already-rendered children. The delimiter run length
//! selects between variants; unsupported lengths pass the text through.

use crate::error::Error;
use crate::parsing::node::Node;
use crate::parsing::rules::SyntaxKind;

use super::external::{self, ExternalFiles};
use super::fragment::Fragment;

/// Deepest heading tag HTML defines.
const MAX_HEADER_LEVEL: usize = 6;

pub fn pack(node: &Node, text: &str, files: &dyn ExternalFiles) -> Result<Fragment, Error> {
    let run = node.run_length();
    let fragment = match node.kind {
        SyntaxKind::Modifier | SyntaxKind::PlainText => Fragment::text(text),
        SyntaxKind::Math => match run {
            1 => Fragment::text(format!("\\({text}\\)")),
            2 => Fragment::text(format!("\n$${text}$$")),
            _ => Fragment::text(text),
        },
        SyntaxKind::Reference => match run {
            2 => Fragment::element("", &format!("<dt-cite key=\"{text}\">"), "", "</dt-cite>"),
            _ => Fragment::text(text),
        },
        SyntaxKind::Jump => {
            let quoted = text.replace('"', "\\\"");
            let target = quoted.replace('>', "");
            Fragment::element("", &format!("<a href=\"#{target}\">"), &quoted, "</a>")
        }
        SyntaxKind::Link => link(text)?,
        SyntaxKind::Caption => Fragment::element("", "<figcaption>", text, "</figcaption>"),
        SyntaxKind::External => external::include(text, files)?,
        SyntaxKind::Spacer => {
            let width = node.delimiter.trim_start_matches('<').trim_end_matches('>');
            Fragment::element("", &format!("<div style='width: {width}px;'>"), "", "</div>")
        }
        SyntaxKind::NewLine => Fragment::text("\n"),
        SyntaxKind::Ignore => Fragment::text(""),
        SyntaxKind::Divider => Fragment::element("\n", "<hr>", text, "\n"),
        SyntaxKind::NewPage => Fragment::element(
            "\n",
            "<p style=\"page-break-after: always;\">",
            "",
            "</p>\n",
        ),
        SyntaxKind::Bibliography => Fragment::element(
            "",
            "<script type=\"text/bibliography\">",
            &format!("\n{text}\n"),
            "</script>",
        ),
        SyntaxKind::Note => match run {
            2 => Fragment::element("", "<dt-fn>", text, "</dt-fn>"),
            // Triple parentheses stay literal.
            3 => Fragment::text(format!("((({text})))")),
            _ => Fragment::text(text),
        },
        SyntaxKind::Emphasis => match run {
            1 => Fragment::element("", "<i>", text, "</i>"),
            2 => Fragment::element("", "<b>", text, "</b>"),
            3 => Fragment::element("", "<u>", text, "</u>"),
            4 => Fragment::element(
                "",
                "<text style='font-family: monospace;'>",
                text,
                "</text>",
            ),
            _ => Fragment::text(text),
        },
        SyntaxKind::InlineCode => {
            Fragment::element("", "<code>", &html_escape::encode_text(text), "</code>")
        }
        SyntaxKind::Color => {
            let color = node.delimiter.trim_start_matches('{').trim_end_matches('}');
            Fragment::element("", &format!("<font color='{color}'>"), &format!(" {text} "), "</font>")
        }
        SyntaxKind::Title => Fragment::element("", "<h1>", text, "</h1>"),
        SyntaxKind::Header => {
            let level = run.min(MAX_HEADER_LEVEL);
            let id = text.trim().replace('"', "\\\"").replace('>', "");
            Fragment::element(
                "",
                &format!("<h{level} id=\"{id}\">"),
                text,
                &format!("</h{level}>"),
            )
        }
        SyntaxKind::Subtext => Fragment::element(
            "",
            &format!(
                "<p style='padding-left: {}px; margin-top: 0px; margin-bottom: 0px;'>",
                15 * run
            ),
            text,
            "</p>",
        ),
        SyntaxKind::UnorderedItem | SyntaxKind::OrderedItem => {
            Fragment::element("", "<li>", text, "</li>")
        }
        // An empty cell is the line's trailing bar.
        SyntaxKind::TableCell if text.is_empty() => Fragment::text(""),
        SyntaxKind::TableCell => Fragment::element("", "<td>", text, "</td>"),
    };
    Ok(fragment)
}

/// `@{text}{url}@`: the text runs up to the last `}`, which must be
/// followed by `{`.
fn link(contents: &str) -> Result<Fragment, Error> {
    let Some((text, rest)) = contents.rsplit_once('}') else {
        return Err(Error::syntax(
            "expected format '@{<text>}{<link>}@', but missing inner '}'",
        ));
    };
    let Some(url) = rest.strip_prefix('{') else {
        return Err(Error::syntax(
            "expected format '@{<text>}{<link>}@', but missing inner '{'",
        ));
    };
    Ok(Fragment::element("", &format!("<a href='{url}'>"), text, "</a>"))
}
