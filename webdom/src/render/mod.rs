//! HTML serialization.

use std::fmt::{self, Write};

use crate::element::{Content, Element};

/// Serialize an element tree to an HTML string.
pub fn to_html(root: &Element) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_html(root, &mut out);
    out
}

/// Serialize an element tree into any `fmt::Write` sink.
///
/// Attributes are emitted as `id`, `class`, `style`, then the remaining
/// attributes in insertion order. Keys and interaction flags are host
/// metadata and are not written.
pub fn write_html<W: Write>(el: &Element, out: &mut W) -> fmt::Result {
    if el.is_fragment() {
        return write_content(&el.content, out);
    }

    write!(out, "<{}", el.tag)?;
    if let Some(id) = &el.id {
        write_attribute(out, "id", id)?;
    }
    if let Some(class) = &el.class {
        write_attribute(out, "class", class)?;
    }
    if let Some(style) = &el.style {
        write_attribute(out, "style", style)?;
    }
    for (name, value) in &el.attributes {
        write_attribute(out, name, value)?;
    }
    out.write_char('>')?;

    if el.is_void() {
        return Ok(());
    }

    write_content(&el.content, out)?;
    write!(out, "</{}>", el.tag)
}

fn write_content<W: Write>(content: &Content, out: &mut W) -> fmt::Result {
    match content {
        Content::None => Ok(()),
        Content::Text(text) => out.write_str(&escape_text(text)),
        Content::Children(children) => {
            for child in children {
                write_html(child, out)?;
            }
            Ok(())
        }
    }
}

fn write_attribute<W: Write>(out: &mut W, name: &str, value: &str) -> fmt::Result {
    write!(out, " {}=\"{}\"", name, escape_attribute(value))
}

/// Escape `&`, `<` and `>` for text nodes.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escape text nodes plus double quotes for attribute values.
pub fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
