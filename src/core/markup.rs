//! Minimal markup tree.
//!
//! Rendering builds values of these types instead of concatenating strings,
//! so output can be inspected in tests and is escaped exactly once, when it
//! is serialized through `Display`.

use std::fmt::{self, Write};

const VOID_ELEMENTS: &[&str] = &["meta", "link", "br", "hr", "img", "input"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    Element(Element),
    Text(String),
    /// Trusted markup emitted verbatim, e.g. a doctype.
    Raw(String),
    Fragment(Vec<Markup>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Markup>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn child(mut self, child: impl Into<Markup>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Markup>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Markup::Text(text.into()))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map_or(false, |classes| classes.split_whitespace().any(|c| c == class))
    }
}

impl From<Element> for Markup {
    fn from(element: Element) -> Self {
        Markup::Element(element)
    }
}

impl Markup {
    pub fn text(text: impl Into<String>) -> Self {
        Markup::Text(text.into())
    }

    /// Concatenated text content, unescaped.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Markup::Text(text) => out.push_str(text),
            Markup::Raw(_) => {}
            Markup::Element(element) => out.push_str(&element.text_content()),
            Markup::Fragment(items) => {
                for item in items {
                    item.collect_text(out);
                }
            }
        }
    }

    /// Depth-first search for every element carrying `class`.
    pub fn find_by_class<'a>(&'a self, class: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.walk_class(class, &mut found);
        found
    }

    fn walk_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        match self {
            Markup::Element(element) => {
                if element.has_class(class) {
                    found.push(element);
                }
                for child in &element.children {
                    child.walk_class(class, found);
                }
            }
            Markup::Fragment(items) => {
                for item in items {
                    item.walk_class(class, found);
                }
            }
            Markup::Text(_) | Markup::Raw(_) => {}
        }
    }

    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('<')?;
        f.write_str(self.tag)?;
        for (name, value) in &self.attrs {
            write!(f, " {}=\"{}\"", name, escape_text(value))?;
        }
        f.write_char('>')?;

        if VOID_ELEMENTS.contains(&self.tag) {
            return Ok(());
        }

        for child in &self.children {
            write!(f, "{}", child)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Markup::Element(element) => write!(f, "{}", element),
            Markup::Text(text) => f.write_str(&escape_text(text)),
            Markup::Raw(raw) => f.write_str(raw),
            Markup::Fragment(items) => {
                for item in items {
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_serialization() {
        let markup: Markup = Element::new("div")
            .class("detail-item")
            .child(Element::new("span").class("detail-label").text("Z:"))
            .into();

        assert_eq!(
            markup.to_html(),
            r#"<div class="detail-item"><span class="detail-label">Z:</span></div>"#
        );
    }

    #[test]
    fn test_text_and_attributes_are_escaped() {
        let markup: Markup = Element::new("a")
            .attr("href", "https://example.com/?a=1&b=\"2\"")
            .text("<script>alert('x')</script>")
            .into();

        assert_eq!(
            markup.to_html(),
            "<a href=\"https://example.com/?a=1&amp;b=&quot;2&quot;\">&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;</a>"
        );
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let markup: Markup = Element::new("meta").attr("charset", "utf-8").into();
        assert_eq!(markup.to_html(), r#"<meta charset="utf-8">"#);
    }

    #[test]
    fn test_fragment_and_queries() {
        let markup = Markup::Fragment(vec![
            Element::new("p").class("a b").text("one").into(),
            Markup::Raw("<!-- raw -->".to_string()),
            Element::new("p").class("b").text("two").into(),
        ]);

        assert_eq!(markup.text_content(), "onetwo");
        assert_eq!(markup.find_by_class("b").len(), 2);
        assert_eq!(markup.find_by_class("a").len(), 1);
        assert_eq!(
            markup.to_html(),
            r#"<p class="a b">one</p><!-- raw --><p class="b">two</p>"#
        );
    }
}
