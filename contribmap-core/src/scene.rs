//! Output element tree and its SVG serialization.

use std::fmt::{self, Write};

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Sets `name`, replacing an existing value in place.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl ToString) {
        let name = name.into();
        let value = value.to_string();
        match self.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some(existing) => existing.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Depth-first iterator over this element and all descendants.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.descendants());
        }
        out
    }
}

/// Serialize `root` as a standalone, indented SVG document.
pub fn to_document(root: &Element) -> Result<String, fmt::Error> {
    let mut out = String::with_capacity(64 * 1024);
    out.push_str("<?xml version='1.0' encoding='utf-8'?>\n");
    write_element(&mut out, root, 0)?;
    Ok(out)
}

fn write_element(out: &mut String, element: &Element, depth: usize) -> fmt::Result {
    let indent = "  ".repeat(depth);
    write!(out, "{}<{}", indent, element.name)?;
    for (name, value) in &element.attributes {
        write!(out, " {}=\"{}\"", name, escape_attr(value))?;
    }

    match (&element.text, element.children.is_empty()) {
        (None, true) => writeln!(out, "/>"),
        (Some(text), true) => writeln!(out, ">{}</{}>", escape_text(text), element.name),
        (text, false) => {
            writeln!(out, ">")?;
            if let Some(text) = text {
                writeln!(out, "{}  {}", indent, escape_text(text))?;
            }
            for child in &element.children {
                write_element(out, child, depth + 1)?;
            }
            writeln!(out, "{}</{}>", indent, element.name)
        }
    }
}

pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}

pub fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\n' => escaped.push_str("&#10;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Fixed-precision number formatting so identical layouts serialize to
/// identical bytes. Trailing zeros are dropped and `-0` prints as `0`.
pub fn fmt_num(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let mut text = format!("{:.4}", rounded);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}
