// src/core/xml.rs
//
// Forgiving XML/SVG reader into a `Document`. Handles what badge images
// actually contain (prolog, comments, CDATA, namespaced names, self-closing
// tags) and tolerates stray or mismatched end tags instead of failing.

use thiserror::Error;

use super::markup::Document;
use super::sanitize::decode_entities;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MarkupError {
    #[error("document is empty")]
    Empty,
    #[error("unterminated {what} at byte {at}")]
    Unterminated { what: &'static str, at: usize },
    #[error("no elements found")]
    NoElements,
}

/// Strip a namespace prefix: `svg:text` → `text`.
fn local_name(name: &str) -> &str {
    name.rsplit(':').next().unwrap_or(name)
}

pub fn parse(src: &str) -> Result<Document, MarkupError> {
    if src.trim().is_empty() {
        return Err(MarkupError::Empty);
    }

    let mut doc = Document::new();
    // (node id, lowercased local tag)
    let mut stack: Vec<(usize, String)> = vec![(0, s!("#document"))];
    let bytes = src.as_bytes();
    let mut i = 0;
    let mut elements = 0usize;

    while i < bytes.len() {
        let parent = stack.last().map(|(id, _)| *id).unwrap_or(0);

        if bytes[i] != b'<' {
            let end = src[i..].find('<').map(|r| i + r).unwrap_or(src.len());
            let raw = &src[i..end];
            if !raw.trim().is_empty() {
                doc.append_text(parent, &decode_entities(raw));
            }
            i = end;
            continue;
        }

        let rest = &src[i..];
        if rest.starts_with("<!--") {
            let close = rest.find("-->").ok_or(MarkupError::Unterminated { what: "comment", at: i })?;
            i += close + 3;
        } else if rest.starts_with("<![CDATA[") {
            let close = rest.find("]]>").ok_or(MarkupError::Unterminated { what: "CDATA", at: i })?;
            let text = &rest[9..close];
            if !text.trim().is_empty() {
                doc.append_text(parent, text);
            }
            i += close + 3;
        } else if rest.starts_with("<?") {
            let close = rest.find("?>").ok_or(MarkupError::Unterminated { what: "declaration", at: i })?;
            i += close + 2;
        } else if rest.starts_with("<!") {
            let close = rest.find('>').ok_or(MarkupError::Unterminated { what: "doctype", at: i })?;
            i += close + 1;
        } else if rest.starts_with("</") {
            let close = rest.find('>').ok_or(MarkupError::Unterminated { what: "end tag", at: i })?;
            let name = local_name(rest[2..close].trim()).to_ascii_lowercase();
            // Pop to the nearest matching open element; ignore strays.
            if let Some(pos) = stack.iter().rposition(|(_, t)| *t == name) {
                if pos > 0 {
                    stack.truncate(pos);
                }
            }
            i += close + 1;
        } else {
            let (tag_end, self_closing, tag, attrs) = read_start_tag(src, i)?;
            let tag_lc = tag.to_ascii_lowercase();
            let id = doc.append_element_owned(parent, tag, attrs);
            elements += 1;
            if !self_closing {
                stack.push((id, tag_lc));
            }
            i = tag_end;
        }
    }

    if elements == 0 {
        return Err(MarkupError::NoElements);
    }
    Ok(doc)
}

/// Parse `<name a="1" b='2' c>` starting at `start` (the '<').
/// Returns (index after '>', self-closing, local name, attributes).
fn read_start_tag(
    src: &str,
    start: usize,
) -> Result<(usize, bool, String, Vec<(String, String)>), MarkupError> {
    let bytes = src.as_bytes();
    let unterminated = MarkupError::Unterminated { what: "start tag", at: start };
    let mut i = start + 1;

    let name_start = i;
    while i < bytes.len() && !bytes[i].is_ascii_whitespace() && bytes[i] != b'>' && bytes[i] != b'/' {
        i += 1;
    }
    let tag = s!(local_name(&src[name_start..i]));

    let mut attrs = Vec::new();
    loop {
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        match bytes.get(i) {
            None => return Err(unterminated),
            Some(b'>') => return Ok((i + 1, false, tag, attrs)),
            Some(b'/') => {
                if bytes.get(i + 1) == Some(&b'>') {
                    return Ok((i + 2, true, tag, attrs));
                }
                i += 1;
                continue;
            }
            Some(_) => {}
        }

        let key_start = i;
        while i < bytes.len()
            && !bytes[i].is_ascii_whitespace()
            && !matches!(bytes[i], b'=' | b'>' | b'/')
        {
            i += 1;
        }
        let key = s!(local_name(&src[key_start..i]));

        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if bytes.get(i) != Some(&b'=') {
            attrs.push((key, s!()));
            continue;
        }
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }

        let value = match bytes.get(i) {
            Some(&q) if q == b'"' || q == b'\'' => {
                let vs = i + 1;
                let close = src[vs..].find(q as char).ok_or(unterminated.clone())?;
                i = vs + close + 1;
                &src[vs..vs + close]
            }
            Some(_) => {
                let vs = i;
                while i < bytes.len() && !bytes[i].is_ascii_whitespace() && bytes[i] != b'>' {
                    i += 1;
                }
                &src[vs..i]
            }
            None => return Err(unterminated),
        };
        attrs.push((key, decode_entities(value)));
    }
}
