/// Packed output for one construct, remembering where its opening tag ends.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fragment {
    pub html: String,
    /// Byte offset of the `>` closing the first opening tag, if any.
    pub open_tag_end: Option<usize>,
}

impl Fragment {
    /// Output with no tag to inject into.
    pub fn text(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            open_tag_end: None,
        }
    }

    /// `lead` + `open_tag` + `body` + `close`, where `open_tag` ends in `>`.
    pub fn element(lead: &str, open_tag: &str, body: &str, close: &str) -> Self {
        debug_assert!(open_tag.ends_with('>'), "open tag {open_tag:?} is not closed");
        let mut html = String::with_capacity(lead.len() + open_tag.len() + body.len() + close.len());
        html.push_str(lead);
        html.push_str(open_tag);
        let open_tag_end = html.len().checked_sub(1);
        html.push_str(body);
        html.push_str(close);
        Self { html, open_tag_end }
    }

    /// Splices ` attrs` into the opening tag.
    ///
    /// Returns false, leaving the fragment untouched, if there is no tag.
    pub fn inject(&mut self, attrs: &str) -> bool {
        let Some(at) = self.open_tag_end else {
            return false;
        };
        self.html.insert_str(at, &format!(" {attrs}"));
        self.open_tag_end = Some(at + attrs.len() + 1);
        true
    }
}

/// Rendered output plus any modifier attributes nothing absorbed yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rendered {
    pub html: String,
    pub attrs: String,
}

/// Appends one modifier's attribute text to an accumulator.
pub fn push_attrs(acc: &mut String, attrs: &str) {
    let attrs = attrs.trim();
    if attrs.is_empty() {
        return;
    }
    if !acc.is_empty() {
        acc.push(' ');
    }
    acc.push_str(attrs);
}
