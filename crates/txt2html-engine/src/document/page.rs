use std::path::PathBuf;

use html_escape::encode_text;

use super::front_matter::FrontMatter;

const LIST_ENTRY: &str = "       - ";

const DISTILL_ONLINE: &str = "http://people.cs.vt.edu/tchlux/distill.template.v1.no-banner.js";
const MATHJAX_ONLINE: &str = "https://cdnjs.cloudflare.com/ajax/libs/mathjax/2.7.2/MathJax.js?config=TeX-MML-AM_CHTML";

const STYLE: &str = r#"    <style type="text/css">
      dt-article ol, dt-article ul {
        padding-left: 50px;
      }

      dt-article ul {
        list-style: none;
      }

      dt-article li {
        margin-bottom: 10px;
      }

      ul li:before {
        content: "–  ";
        margin-left: -1em
      }

      td {
        padding-left: 10px !important;
        padding-right: 10px !important;
        padding-top: 7px !important;
        padding-bottom: 7px !important;
        line-height: 1.3 !important;
      }
    </style>
"#;

const EMPTY_BIBLIOGRAPHY: &str = "<script type=\"text/bibliography\">\n</script>";
const APPENDIX: &str = "<dt-appendix>\n</dt-appendix>";

/// How the surrounding page is assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    /// Load script resources from `resource_folder` instead of the web.
    pub use_local: bool,
    pub resource_folder: PathBuf,
    /// Emit the appendix section when there is something to put in it.
    pub appendix: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            use_local: true,
            resource_folder: PathBuf::from("resources"),
            appendix: true,
        }
    }
}

/// Everything a page is built from.
#[derive(Debug, Clone, Copy)]
pub struct PageParts<'a> {
    pub front_matter: &'a FrontMatter,
    pub body: &'a str,
    pub bibliography: Option<&'a str>,
    pub found_note: bool,
}

/// Wraps a rendered body into a complete distill article page.
pub fn render_page(parts: PageParts<'_>, options: &PageOptions) -> String {
    let mut html = String::new();
    let resources = options.resource_folder.display().to_string();

    html.push_str("<!doctype html>\n<meta charset=\"utf-8\">\n\n");
    html.push_str("    <!-- Include Distill -->\n");
    html.push_str(&switched(
        options.use_local,
        &format!("<script src=\"{resources}/distill.template.v1.no-banner.js\"></script>"),
        &format!("<script src=\"{DISTILL_ONLINE}\"></script>"),
    ));
    html.push_str("    <!-- Include MathJax -->\n");
    html.push_str(&switched(
        options.use_local,
        &format!(
            "<script type=\"text/javascript\" async src=\"{resources}/MathJax-2.7.2/MathJax.js?config=TeX-AMS-MML_HTMLorMML,local/local\"></script>"
        ),
        &format!("<script type=\"text/javascript\" async src=\"{MATHJAX_ONLINE}\"></script>"),
    ));

    let front = parts.front_matter;
    let mut authors = String::new();
    let mut affiliations = String::new();
    for author in &front.authors {
        authors.push_str(&format!(
            "{LIST_ENTRY}{}: {}\n",
            encode_text(&author.name),
            encode_text(&author.web)
        ));
        affiliations.push_str(&format!("{LIST_ENTRY}{}\n", encode_text(&author.email)));
    }
    html.push_str(&format!(
        "\n    <script type=\"text/front-matter\">\n      title: {}\n      description: {}\n      authors:\n{authors}      affiliations:\n{affiliations}    </script>\n\n",
        encode_text(&front.script_title()),
        encode_text(&front.script_description()),
    ));

    html.push_str(STYLE);
    html.push_str(&format!(
        "\n    <dt-article>\n    <h1>{}</h1>\n    <p>{}</p>\n    <dt-byline></dt-byline>\n\n{}\n\n    </dt-article>\n\n",
        encode_text(&front.title),
        encode_text(&front.description),
        parts.body,
    ));

    let has_appendix_content = parts.found_note || parts.bibliography.is_some();
    if options.appendix && has_appendix_content {
        html.push_str(APPENDIX);
    }
    html.push_str("\n\n");
    html.push_str(parts.bibliography.unwrap_or(EMPTY_BIBLIOGRAPHY));
    html.push('\n');
    html
}

/// Emits `local` or `online`, commenting out the other.
fn switched(use_local: bool, local: &str, online: &str) -> String {
    let (on, off) = if use_local {
        (local, online)
    } else {
        (online, local)
    };
    format!("    {on}\n    <!-- {off} -->\n")
}
