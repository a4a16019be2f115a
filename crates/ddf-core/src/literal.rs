// Dweve DDF - Spreadsheet-Driven Fixture Compiler
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Cell literal parsing.
//!
//! Cells under a `seq`/`map` type (and untyped cells that start with a
//! bracket) hold JSON-compatible flow literals such as `[1, 2]` or
//! `{name: ada, age: 36}`. Untyped scalar cells run through an inference
//! ladder: booleans, integers, floats, quoted strings, else opaque text.

use crate::value::Value;
use indexmap::IndexMap;

/// Parse a complete flow literal. The whole cell must be consumed.
pub fn parse_flow(text: &str) -> Result<Value, String> {
    let chars: Vec<char> = text.chars().collect();
    let mut parser = Parser { chars, pos: 0 };
    parser.skip_ws();
    let value = parser.value()?;
    parser.skip_ws();
    if parser.pos != parser.chars.len() {
        return Err(format!(
            "unexpected trailing characters after literal: \"{}\"",
            parser.rest()
        ));
    }
    Ok(value)
}

/// Infer an untyped cell's scalar value.
///
/// Mirrors what a JSON-restricted hierarchical parser would make of the
/// text: `true`/`false`, integers and floats resolve to their kinds, flow
/// and quoted literals are parsed, anything else stays a string. Malformed
/// bracketed text falls back to the opaque string rather than failing,
/// since nothing declared a structured type for the cell.
pub fn infer_scalar(text: &str) -> Value {
    match text {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        "null" => return Value::Null,
        _ => {}
    }
    if let Some(n) = parse_int(text) {
        return Value::Int(n);
    }
    if let Some(n) = float_token(text) {
        return Value::Float(n);
    }
    if text.starts_with('[') || text.starts_with('{') || text.starts_with('"') {
        if let Ok(value) = parse_flow(text) {
            return value;
        }
    }
    Value::String(text.to_string())
}

/// A `str`-typed cell: unquote a fully-quoted cell, keep everything else
/// opaque. This is how the `""` sentinel becomes the empty string.
pub fn str_value(text: &str) -> Value {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        if let Ok(Value::String(s)) = parse_flow(text) {
            return Value::String(s);
        }
    }
    Value::String(text.to_string())
}

fn parse_int(text: &str) -> Option<i64> {
    if !text.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Parse float syntax, rejecting the alphabetic forms the spreadsheet
/// grammar does not know (inf, nan, hex) while keeping exponent notation.
pub(crate) fn float_token(text: &str) -> Option<f64> {
    let plausible = text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !plausible || !text.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn rest(&self) -> String {
        self.chars[self.pos..].iter().collect()
    }

    fn value(&mut self) -> Result<Value, String> {
        match self.peek() {
            Some('[') => self.seq(),
            Some('{') => self.map(),
            Some('"') => Ok(Value::String(self.quoted()?)),
            Some(_) => Ok(bare_scalar(&self.bare(&[',', ']', '}']))),
            None => Err("unexpected end of literal".to_string()),
        }
    }

    fn seq(&mut self) -> Result<Value, String> {
        self.bump();
        let mut items = Vec::new();
        self.skip_ws();
        if self.peek() == Some(']') {
            self.bump();
            return Ok(Value::Seq(items));
        }
        loop {
            self.skip_ws();
            items.push(self.value()?);
            self.skip_ws();
            match self.bump() {
                Some(',') => {}
                Some(']') => return Ok(Value::Seq(items)),
                _ => return Err("expected ',' or ']' in sequence literal".to_string()),
            }
        }
    }

    fn map(&mut self) -> Result<Value, String> {
        self.bump();
        let mut entries = IndexMap::new();
        self.skip_ws();
        if self.peek() == Some('}') {
            self.bump();
            return Ok(Value::Map(entries));
        }
        loop {
            self.skip_ws();
            let key = match self.peek() {
                Some('"') => self.quoted()?,
                Some(_) => self.bare(&[':', ',', '}']),
                None => return Err("unexpected end of mapping literal".to_string()),
            };
            self.skip_ws();
            if self.bump() != Some(':') {
                return Err(format!("expected ':' after mapping key \"{}\"", key));
            }
            self.skip_ws();
            let value = self.value()?;
            entries.insert(key, value);
            self.skip_ws();
            match self.bump() {
                Some(',') => {}
                Some('}') => return Ok(Value::Map(entries)),
                _ => return Err("expected ',' or '}' in mapping literal".to_string()),
            }
        }
    }

    fn quoted(&mut self) -> Result<String, String> {
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(out),
                Some('\\') => match self.bump() {
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some('r') => out.push('\r'),
                    Some(c) => out.push(c),
                    None => return Err("unterminated string literal".to_string()),
                },
                Some(c) => out.push(c),
                None => return Err("unterminated string literal".to_string()),
            }
        }
    }

    fn bare(&mut self, terminators: &[char]) -> String {
        let mut out = String::new();
        while let Some(c) = self.peek() {
            if terminators.contains(&c) {
                break;
            }
            out.push(c);
            self.pos += 1;
        }
        out.trim().to_string()
    }
}

fn bare_scalar(token: &str) -> Value {
    match token {
        "null" | "" => return Value::Null,
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    if let Some(n) = parse_int(token) {
        return Value::Int(n);
    }
    if let Some(n) = float_token(token) {
        return Value::Float(n);
    }
    Value::String(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_empty_containers() {
        assert_eq!(parse_flow("[]").unwrap(), Value::Seq(vec![]));
        assert_eq!(parse_flow("{}").unwrap(), Value::Map(IndexMap::new()));
        assert_eq!(parse_flow("{ }").unwrap(), Value::Map(IndexMap::new()));
    }

    #[test]
    fn parses_nested_flow() {
        let value = parse_flow("{user: {name: ada, tags: [a, b]}, count: 2}").unwrap();
        assert_eq!(value.get_path("user.name"), Some(&Value::from("ada")));
        assert_eq!(value.get_path("user.tags.1"), Some(&Value::from("b")));
        assert_eq!(value.get_path("count"), Some(&Value::Int(2)));
    }

    #[test]
    fn bare_tokens_resolve_scalar_kinds() {
        let value = parse_flow("[null, true, 3, 1.5, text]").unwrap();
        assert_eq!(
            value,
            Value::Seq(vec![
                Value::Null,
                Value::Bool(true),
                Value::Int(3),
                Value::Float(1.5),
                Value::from("text"),
            ])
        );
    }

    #[test]
    fn quoted_keys_and_values() {
        let value = parse_flow("{\"a b\": \"x, y\"}").unwrap();
        assert_eq!(value.get_path("a b"), Some(&Value::from("x, y")));
    }

    #[test]
    fn trailing_garbage_is_rejected() {
        assert!(parse_flow("[] x").is_err());
        assert!(parse_flow("[1").is_err());
        assert!(parse_flow("{a 1}").is_err());
    }

    #[test]
    fn infer_ladder() {
        assert_eq!(infer_scalar("true"), Value::Bool(true));
        assert_eq!(infer_scalar("30"), Value::Int(30));
        assert_eq!(infer_scalar("1.5"), Value::Float(1.5));
        assert_eq!(infer_scalar("[1]"), Value::Seq(vec![Value::Int(1)]));
        assert_eq!(infer_scalar("hello world"), Value::from("hello world"));
        assert_eq!(infer_scalar("TRUE"), Value::from("TRUE"));
        assert_eq!(infer_scalar("1.2.3"), Value::from("1.2.3"));
        assert_eq!(infer_scalar("[oops"), Value::from("[oops"));
    }

    #[test]
    fn str_values_unquote_fully_quoted_cells() {
        assert_eq!(str_value("\"\""), Value::String(String::new()));
        assert_eq!(str_value("\"a b\""), Value::from("a b"));
        assert_eq!(str_value("plain"), Value::from("plain"));
        assert_eq!(str_value("\"unclosed"), Value::from("\"unclosed"));
        assert_eq!(str_value("123"), Value::from("123"));
    }
}
