//! Terraform JSON syntax parser (`.tf.json` files).

use super::traits::{ConfigParser, ModuleCall, line_of_offset};
use crate::error::{ParseFormat, Result, SbomError};
use serde_json::{Map, Value};
use std::path::Path;

/// Parser for Terraform files in JSON syntax.
pub struct JsonConfigParser;

impl JsonConfigParser {
    /// Create a new JSON configuration parser.
    pub fn new() -> Self {
        Self
    }

    fn parse_value(content: &str, path: &Path) -> Result<Value> {
        serde_json::from_str(content).map_err(|e| SbomError::Parse {
            path: path.to_path_buf(),
            format: ParseFormat::Json,
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        })
    }

    fn structure_error(path: &Path, line: usize, message: &str) -> SbomError {
        SbomError::Parse {
            path: path.to_path_buf(),
            format: ParseFormat::Json,
            line,
            column: 1,
            message: message.to_string(),
        }
    }

    /// Block bodies are objects, or arrays holding exactly one object.
    fn block_body(value: &Value) -> Option<&Map<String, Value>> {
        match value {
            Value::Object(map) => Some(map),
            Value::Array(items) => match items.as_slice() {
                [Value::Object(map)] => Some(map),
                _ => None,
            },
            _ => None,
        }
    }

    /// The `module` property may hold one object or a list of them.
    fn module_objects(value: &Value) -> Option<Vec<&Map<String, Value>>> {
        match value {
            Value::Object(map) => Some(vec![map]),
            Value::Array(items) => items.iter().map(Value::as_object).collect(),
            _ => None,
        }
    }

    fn string_attribute(
        body: &Map<String, Value>,
        key: &str,
        name: &str,
        path: &Path,
        line: usize,
    ) -> Result<Option<String>> {
        match body.get(key) {
            None => Ok(None),
            Some(Value::String(s)) if !has_template(s) => Ok(Some(unescape_template(s))),
            Some(_) => Err(SbomError::InvalidAttribute {
                path: path.to_path_buf(),
                line,
                module: name.to_string(),
                attribute: key.to_string(),
                message: "a literal string is required; variables and templates are not allowed"
                    .to_string(),
            }),
        }
    }
}

/// Whether `s` holds an unescaped `${` interpolation or `%{` directive.
///
/// `$${` and `%%{` are literal escapes.
fn has_template(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i + 1 < bytes.len() {
        let c = bytes[i];
        if c == b'$' || c == b'%' {
            if bytes[i + 1] == b'{' {
                return true;
            }
            if bytes[i + 1] == c && bytes.get(i + 2) == Some(&b'{') {
                i += 3;
                continue;
            }
        }
        i += 1;
    }
    false
}

fn unescape_template(s: &str) -> String {
    s.replace("$${", "${").replace("%%{", "%{")
}

impl Default for JsonConfigParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParser for JsonConfigParser {
    fn parse(&self, content: &str, path: &Path) -> Result<Vec<ModuleCall>> {
        let value = Self::parse_value(content, path)?;
        let Value::Object(root) = value else {
            return Err(Self::structure_error(
                path,
                1,
                "the root of a Terraform JSON file must be an object",
            ));
        };
        let Some(modules) = root.get("module") else {
            return Ok(Vec::new());
        };

        let mut locator = KeyLocator::new(content);
        let Some(objects) = Self::module_objects(modules) else {
            return Err(Self::structure_error(
                path,
                locator.module_line(),
                "\"module\" must be an object keyed by module name",
            ));
        };

        let mut calls = Vec::new();
        for object in objects {
            for (name, value) in object {
                let line = locator.line_of_key(name);
                let Some(body) = Self::block_body(value) else {
                    return Err(Self::structure_error(
                        path,
                        line,
                        &format!("module \"{name}\" must be an object"),
                    ));
                };

                let mut call = ModuleCall::new(name.clone(), path, line);
                if let Some(source) = Self::string_attribute(body, "source", name, path, line)? {
                    call = call.with_source(source);
                }
                if let Some(version) = Self::string_attribute(body, "version", name, path, line)? {
                    call = call.with_version(version);
                }
                calls.push(call);
            }
        }

        Ok(calls)
    }

    fn supported_extensions(&self) -> &[&str] {
        &[".tf.json"]
    }
}

/// Finds the lines of module name keys in the raw JSON text.
///
/// `serde_json::Value` carries no positions, so the text is scanned once
/// for object keys. Only keys directly inside the top-level `"module"`
/// value count as module names; nested keys and string contents are
/// skipped.
struct KeyLocator<'a> {
    content: &'a str,
    module_offset: Option<usize>,
    keys: Vec<(String, usize)>,
    cursor: usize,
}

impl<'a> KeyLocator<'a> {
    fn new(content: &'a str) -> Self {
        let bytes = content.as_bytes();
        let mut stack: Vec<u8> = Vec::new();
        let mut module_offset = None;
        let mut after_module_key = false;
        let mut in_module = false;
        let mut keys = Vec::new();

        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'"' => {
                    let start = i;
                    i = skip_string(bytes, i);
                    if skip_whitespace(bytes, i).is_some_and(|j| bytes[j] == b':') {
                        let key: Option<String> = serde_json::from_str(&content[start..i]).ok();
                        if stack.len() == 1 {
                            after_module_key = key.as_deref() == Some("module");
                            if after_module_key && module_offset.is_none() {
                                module_offset = Some(start);
                            }
                        } else if in_module
                            && Self::is_module_name_depth(&stack)
                            && let Some(key) = key
                        {
                            keys.push((key, start));
                        }
                    }
                    continue;
                }
                open @ (b'{' | b'[') => {
                    if stack.len() == 1 && after_module_key {
                        in_module = true;
                        after_module_key = false;
                    }
                    stack.push(open);
                }
                b'}' | b']' => {
                    stack.pop();
                    if stack.len() == 1 {
                        in_module = false;
                    }
                }
                _ => {}
            }
            i += 1;
        }

        Self {
            content,
            module_offset,
            keys,
            cursor: 0,
        }
    }

    /// `{"module": {NAME: ..}}` or `{"module": [{NAME: ..}]}`
    fn is_module_name_depth(stack: &[u8]) -> bool {
        matches!(stack, [b'{', b'{'] | [b'{', b'[', b'{'])
    }

    fn module_line(&self) -> usize {
        self.module_offset
            .map_or(1, |offset| line_of_offset(self.content, offset))
    }

    fn line_of_key(&mut self, name: &str) -> usize {
        let found = self.keys[self.cursor..]
            .iter()
            .position(|(key, _)| key == name);

        match found {
            Some(index) => {
                let offset = self.keys[self.cursor + index].1;
                self.cursor += index + 1;
                line_of_offset(self.content, offset)
            }
            None => self.module_line(),
        }
    }
}

/// Index just past the string literal opening at `start`.
fn skip_string(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

fn skip_whitespace(bytes: &[u8], from: usize) -> Option<usize> {
    (from..bytes.len()).find(|&i| !bytes[i].is_ascii_whitespace())
}
