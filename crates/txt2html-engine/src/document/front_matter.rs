use crate::error::Error;

pub const DEFAULT_TITLE: &str = "Notes";

/// One `:: name :: email :: web` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub email: String,
    pub web: String,
}

/// Metadata read from the leading lines of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: String,
    pub description: String,
    pub authors: Vec<Author>,
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: String::new(),
            authors: Vec::new(),
        }
    }
}

impl FrontMatter {
    /// Splits leading metadata lines off `text`.
    ///
    /// Metadata only exists when the first line is non-empty, and runs up to
    /// the first empty line: author lines anywhere, then a title, then a
    /// description. A further line ends the block and stays in the body.
    pub fn extract(text: &str) -> Result<(FrontMatter, &str), Error> {
        let mut front = FrontMatter::default();
        let mut has_title = false;
        let mut has_description = false;
        let mut rest = text;

        while let Some((line, after)) = next_line(rest) {
            if line.is_empty() {
                break;
            }
            if let Some(author) = line.strip_prefix("::") {
                front.authors.push(parse_author(line, author)?);
            } else if !has_title {
                front.title = line.trim().to_string();
                has_title = true;
            } else if !has_description {
                front.description = line.trim().to_string();
                has_description = true;
            } else {
                break;
            }
            rest = after;
        }

        Ok((front, rest))
    }

    /// Title as written into the page's front-matter script.
    pub fn script_title(&self) -> String {
        self.title.replace(':', "")
    }

    /// Description as written into the page's front-matter script.
    pub fn script_description(&self) -> String {
        self.description.replace(':', "-")
    }
}

/// Splits off the first line, without its terminator.
fn next_line(text: &str) -> Option<(&str, &str)> {
    if text.is_empty() {
        return None;
    }
    let Some(end) = text.find(['\n', '\r']) else {
        return Some((text, ""));
    };
    let terminator = if text[end..].starts_with("\r\n") { 2 } else { 1 };
    Some((&text[..end], &text[end + terminator..]))
}

fn parse_author(line: &str, fields: &str) -> Result<Author, Error> {
    let parts: Vec<&str> = fields.split("::").map(str::trim).collect();
    let [name, email, web] = parts.as_slice() else {
        return Err(Error::Author {
            line: line.to_string(),
        });
    };
    Ok(Author {
        name: name.to_string(),
        email: email.to_string(),
        web: web.to_string(),
    })
}
