//! Tag-targeted text collection over XML part contents.

use quick_xml::events::Event;
use quick_xml::Reader;

use super::ExtractError;

/// Collect the text content of every element whose *qualified* name equals
/// `tag`, in document order. Duplicates are kept. The qualified name must
/// match exactly — OOXML reuses the local name `t` under several prefixes
/// (`a:t`, `hp:t`, ...), so matching on the local name alone would pull
/// text from the wrong vocabulary.
pub fn collect_tag_text(xml: &str, tag: &str) -> Result<Vec<String>, ExtractError> {
    // No text trimming here: spacing inside a matched element is part of
    // its content, and trimming would also eat the spaces around entity
    // references.
    let mut reader = Reader::from_str(xml);

    let mut collected = Vec::new();
    let mut current: Option<String> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == tag.as_bytes() {
                    current = Some(String::new());
                }
            }
            Ok(Event::Empty(e)) => {
                if e.name().as_ref() == tag.as_bytes() {
                    collected.push(String::new());
                }
            }
            Ok(Event::Text(e)) => {
                if let Some(text) = current.as_mut() {
                    if let Ok(raw) = std::str::from_utf8(e.as_ref()) {
                        text.push_str(&unescape_xml(raw));
                    }
                }
            }
            // Entity references inside text arrive as their own events
            Ok(Event::GeneralRef(e)) => {
                if let Some(text) = current.as_mut() {
                    if let Ok(name) = std::str::from_utf8(e.as_ref()) {
                        if let Some(resolved) = resolve_entity(name) {
                            text.push(resolved);
                        }
                    }
                }
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref() == tag.as_bytes() {
                    if let Some(text) = current.take() {
                        collected.push(text);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExtractError::MalformedXml(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(collected)
}

fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
        .replace("&apos;", "'")
        .replace("&quot;", "\"")
}

/// Resolve a predefined or numeric character reference (the name between
/// `&` and `;`). Unknown named entities are dropped.
fn resolve_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "apos" => Some('\''),
        "quot" => Some('"'),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = if let Some(hex) = code.strip_prefix('x').or_else(|| code.strip_prefix('X'))
            {
                u32::from_str_radix(hex, 16).ok()?
            } else {
                code.parse().ok()?
            };
            char::from_u32(value)
        }
    }
}
