//! Flat markup token types.

/// A start tag with its attributes, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag {
    /// Lowercase element name.
    pub name: String,
    /// `(name, value)` pairs; names are lowercase.
    pub attrs: Vec<(String, String)>,
}

impl StartTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
        }
    }

    /// Add an attribute (builder style, mostly for tests).
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Whether this tag is the given element.
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    /// Value of the first attribute with the given name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Link target of an anchor, if it has one.
    pub fn href(&self) -> Option<&str> {
        self.attr("href")
    }
}

/// One event in a linear markup stream.
///
/// End tags are deliberately absent: the page extractors only ever key off
/// openings and text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupToken {
    StartTag(StartTag),
    /// A run of character data between two tags, entities decoded.
    Text(String),
    EndOfStream,
}

impl MarkupToken {
    pub fn text(s: impl Into<String>) -> Self {
        MarkupToken::Text(s.into())
    }
}

impl From<StartTag> for MarkupToken {
    fn from(tag: StartTag) -> Self {
        MarkupToken::StartTag(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_lookup_returns_first_match() {
        let tag = StartTag::new("a")
            .with_attr("class", "link")
            .with_attr("href", "/route/80/")
            .with_attr("href", "/ignored");

        assert!(tag.is("a"));
        assert!(!tag.is("div"));
        assert_eq!(tag.href(), Some("/route/80/"));
        assert_eq!(tag.attr("class"), Some("link"));
        assert_eq!(tag.attr("id"), None);
    }
}
