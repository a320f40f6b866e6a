//! plist::xml
//!
//! XML encoding of parameter lists.
//!
//! # Layout
//!
//! ```xml
//! <ParameterList name="Regions">
//!   <ParameterList name="Rwia region">
//!     <ParameterList name="box">
//!       <Parameter name="lo" type="Array(double)" value="{0.0, 0.0, 0.0}"/>
//!       <Parameter name="hi" type="Array(double)" value="{103.2, 0.0, 6.0}"/>
//!     </ParameterList>
//!   </ParameterList>
//! </ParameterList>
//! ```
//!
//! Arrays are written as `{a, b, c}` with no escaping of the separators and
//! elements are trimmed on read, so string arrays cannot be encoded if an
//! element is empty, has leading or trailing whitespace, or contains `,`,
//! `{` or `}`.
//! Attributes other than `name`, `type` and `value` are ignored on read.

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::fmt::Display;
use std::str::FromStr;

use super::{Entry, ParameterList, PlistError, Value};

/// Indent width used by [`ParameterList::to_xml`].
pub const DEFAULT_INDENT: usize = 2;

const LIST_TAG: &str = "ParameterList";
const PARAM_TAG: &str = "Parameter";

fn parse_err(e: impl Display) -> PlistError {
    PlistError::Parse(e.to_string())
}

fn encode_err(e: impl Display) -> PlistError {
    PlistError::Encode(e.to_string())
}

/// Encode a list as XML.
///
/// `indent` is the number of spaces per nesting level; zero writes the
/// whole tree on one line.
pub fn write(list: &ParameterList, indent: usize) -> Result<String, PlistError> {
    let mut writer = if indent == 0 {
        Writer::new(Vec::new())
    } else {
        Writer::new_with_indent(Vec::new(), b' ', indent)
    };

    write_list(&mut writer, list)?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    String::from_utf8(bytes).map_err(encode_err)
}

fn write_list(writer: &mut Writer<Vec<u8>>, list: &ParameterList) -> Result<(), PlistError> {
    let mut start = BytesStart::new(LIST_TAG);
    start.push_attribute(("name", list.name()));

    if list.is_empty() {
        writer
            .write_event(Event::Empty(start))
            .map_err(encode_err)?;
        return Ok(());
    }

    writer
        .write_event(Event::Start(start))
        .map_err(encode_err)?;

    for (name, entry) in list.entries() {
        match entry {
            Entry::Parameter(value) => {
                let text = encode_value(name, value)?;
                let mut elem = BytesStart::new(PARAM_TAG);
                elem.push_attribute(("name", name));
                elem.push_attribute(("type", value.type_name()));
                elem.push_attribute(("value", text.as_str()));
                writer
                    .write_event(Event::Empty(elem))
                    .map_err(encode_err)?;
            }
            Entry::Sublist(child) => write_list(writer, child)?,
        }
    }

    writer
        .write_event(Event::End(BytesEnd::new(LIST_TAG)))
        .map_err(encode_err)?;
    Ok(())
}

fn encode_value(name: &str, value: &Value) -> Result<String, PlistError> {
    if let Value::StringArray(items) = value {
        for item in items {
            if let Some(problem) = array_element_problem(item) {
                return Err(PlistError::Unrepresentable(format!(
                    "element '{}' of string array '{}' {}",
                    item, name, problem
                )));
            }
        }
    }
    Ok(value.to_string())
}

/// Why a string array element would not read back unchanged, if it wouldn't.
fn array_element_problem(item: &str) -> Option<&'static str> {
    if item.is_empty() {
        Some("is empty")
    } else if item.trim() != item {
        Some("has leading or trailing whitespace")
    } else if item.contains(|c: char| matches!(c, ',' | '{' | '}')) {
        Some("contains a separator")
    } else {
        None
    }
}

/// Decode a list from XML.
///
/// The document must contain exactly one top-level `<ParameterList>`.
pub fn read(input: &str) -> Result<ParameterList, PlistError> {
    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<ParameterList> = Vec::new();
    let mut root: Option<ParameterList> = None;

    loop {
        match reader.read_event().map_err(parse_err)? {
            Event::Start(e) => {
                if e.name().as_ref() != LIST_TAG.as_bytes() {
                    return Err(unexpected_element(&e));
                }
                if root.is_some() {
                    return Err(PlistError::Parse(
                        "more than one top-level ParameterList".to_string(),
                    ));
                }
                stack.push(ParameterList::new(required_attribute(&e, "name")?));
            }
            Event::Empty(e) => {
                if e.name().as_ref() == LIST_TAG.as_bytes() {
                    let list = ParameterList::new(required_attribute(&e, "name")?);
                    attach(&mut stack, &mut root, list)?;
                } else if e.name().as_ref() == PARAM_TAG.as_bytes() {
                    let (name, value) = decode_parameter(&e)?;
                    let parent = stack.last_mut().ok_or_else(|| {
                        PlistError::Parse(format!(
                            "parameter '{}' outside of a ParameterList",
                            name
                        ))
                    })?;
                    parent.set(name, value);
                } else {
                    return Err(unexpected_element(&e));
                }
            }
            Event::End(e) => {
                if e.name().as_ref() != LIST_TAG.as_bytes() {
                    return Err(PlistError::Parse(format!(
                        "unexpected closing tag '{}'",
                        String::from_utf8_lossy(e.name().as_ref())
                    )));
                }
                let list = stack.pop().ok_or_else(|| {
                    PlistError::Parse("unbalanced closing ParameterList".to_string())
                })?;
                attach(&mut stack, &mut root, list)?;
            }
            Event::Eof => break,
            // Declarations, comments and whitespace carry no data.
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(PlistError::Parse(format!(
            "ParameterList '{}' is never closed",
            open.name()
        )));
    }

    root.ok_or_else(|| PlistError::Parse("no ParameterList element found".to_string()))
}

fn attach(
    stack: &mut [ParameterList],
    root: &mut Option<ParameterList>,
    list: ParameterList,
) -> Result<(), PlistError> {
    if let Some(parent) = stack.last_mut() {
        parent.add_sublist(list);
        return Ok(());
    }
    if root.is_some() {
        return Err(PlistError::Parse(
            "more than one top-level ParameterList".to_string(),
        ));
    }
    *root = Some(list);
    Ok(())
}

fn unexpected_element(e: &BytesStart<'_>) -> PlistError {
    PlistError::Parse(format!(
        "unexpected element '{}'",
        String::from_utf8_lossy(e.name().as_ref())
    ))
}

fn attribute(e: &BytesStart<'_>, key: &str) -> Result<Option<String>, PlistError> {
    for attr in e.attributes() {
        let attr = attr.map_err(parse_err)?;
        if attr.key.as_ref() == key.as_bytes() {
            let value = attr.unescape_value().map_err(parse_err)?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn required_attribute(e: &BytesStart<'_>, key: &str) -> Result<String, PlistError> {
    attribute(e, key)?.ok_or_else(|| {
        PlistError::Parse(format!(
            "element '{}' is missing the '{}' attribute",
            String::from_utf8_lossy(e.name().as_ref()),
            key
        ))
    })
}

fn decode_parameter(e: &BytesStart<'_>) -> Result<(String, Value), PlistError> {
    let name = required_attribute(e, "name")?;
    let type_name = required_attribute(e, "type")?;
    let text = required_attribute(e, "value")?;

    let value = decode_value(&type_name, &text)
        .map_err(|msg| PlistError::Parse(format!("parameter '{}': {}", name, msg)))?;
    Ok((name, value))
}

fn decode_value(type_name: &str, text: &str) -> Result<Value, String> {
    match type_name {
        "bool" => match text.trim() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            other => Err(format!("invalid bool '{}'", other)),
        },
        "int" => parse_scalar(text).map(Value::Int),
        "double" => parse_scalar(text).map(Value::Double),
        "string" => Ok(Value::String(text.to_string())),
        "Array(int)" => parse_array(text, parse_scalar).map(Value::IntArray),
        "Array(double)" => parse_array(text, parse_scalar).map(Value::DoubleArray),
        "Array(string)" => {
            parse_array(text, |s| Ok(s.to_string())).map(Value::StringArray)
        }
        other => Err(format!("unsupported type '{}'", other)),
    }
}

fn parse_scalar<T: FromStr>(text: &str) -> Result<T, String>
where
    T::Err: Display,
{
    text.trim()
        .parse()
        .map_err(|e| format!("invalid value '{}': {}", text.trim(), e))
}

fn parse_array<T>(
    text: &str,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<Vec<T>, String> {
    let inner = text
        .trim()
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .ok_or_else(|| format!("array '{}' must be enclosed in braces", text))?;

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }
    inner.split(',').map(|item| parse(item.trim())).collect()
}
