use std::fmt::Write;

use askama::{Html as HtmlEscaper, MarkupDisplay};

const VOID_TAGS: &[&str] = &["img", "input", "meta", "link", "br"];
const HIDDEN_STYLE: &str = "display: none";

#[derive(Debug, Clone, PartialEq)]
pub enum ViewNode {
    Element(Element),
    Text(String),
    /// Markup that is trusted and written out unescaped (inline SVG, scripts).
    Raw(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: &'static str,
    classes: Vec<String>,
    attrs: Vec<(&'static str, String)>,
    hidden: bool,
    children: Vec<ViewNode>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: Vec::new(),
            hidden: false,
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Keeps the element in the markup but hides it from view.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn child(mut self, child: impl Into<ViewNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ViewNode>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(ViewNode::Text(text.into()))
    }

    #[cfg(test)]
    fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Direct child elements, skipping text.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(ViewNode::as_element)
    }

    /// Depth-first search over this element and its descendants.
    pub fn find(&self, class: &str) -> Option<&Element> {
        if self.has_class(class) {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find(class))
    }

    /// Concatenated text of all descendants, trimmed.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text.trim().to_owned()
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                ViewNode::Text(text) => out.push_str(text),
                ViewNode::Element(element) => element.collect_text(out),
                ViewNode::Raw(_) => {}
            }
        }
    }

    pub fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.classes.join(" ")));
        }
        for (name, value) in &self.attrs {
            let _ = write!(out, " {name}=\"{}\"", escape(value));
        }
        if self.hidden {
            let _ = write!(out, " style=\"{HIDDEN_STYLE}\"");
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

impl ViewNode {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            ViewNode::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn write_html(&self, out: &mut String) {
        match self {
            ViewNode::Element(element) => element.write_html(out),
            ViewNode::Text(text) => out.push_str(&escape(text)),
            ViewNode::Raw(markup) => out.push_str(markup),
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }
}

impl From<Element> for ViewNode {
    fn from(value: Element) -> Self {
        ViewNode::Element(value)
    }
}

impl From<&str> for ViewNode {
    fn from(value: &str) -> Self {
        ViewNode::Text(value.to_owned())
    }
}

impl From<String> for ViewNode {
    fn from(value: String) -> Self {
        ViewNode::Text(value)
    }
}

pub fn escape(input: &str) -> String {
    MarkupDisplay::new_unsafe(input, HtmlEscaper).to_string()
}
