//! Path expression parser.

use super::error::PathError;
use crate::pick::{Key, Symbol};

/// Parser for path expression strings.
pub struct PathParser {
    chars: Vec<char>,
    position: usize,
}

impl PathParser {
    /// Creates a new parser for the given expression.
    pub fn new(expr: &str) -> Self {
        Self {
            chars: expr.chars().collect(),
            position: 0,
        }
    }

    /// Parses the expression into a list of keys.
    pub fn parse(expr: &str) -> Result<Vec<Key>, PathError> {
        let mut parser = PathParser::new(expr);
        parser.parse_path()
    }

    fn parse_path(&mut self) -> Result<Vec<Key>, PathError> {
        let mut keys = Vec::new();

        self.skip_whitespace();
        match self.peek() {
            Some('$') => {
                self.next();
            }
            Some('.') | Some('[') | None => {}
            Some(_) => keys.push(self.parse_name()?),
        }

        loop {
            self.skip_whitespace();
            match self.peek() {
                None => break,
                Some('.') => {
                    self.next();
                    keys.push(self.parse_name()?);
                }
                Some('[') => keys.push(self.parse_bracket_expression()?),
                Some(ch) => {
                    return Err(PathError::UnexpectedToken {
                        position: self.position,
                        found: ch.to_string(),
                        expected: "'.' or '['".to_string(),
                    })
                }
            }
        }

        Ok(keys)
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    /// Returns the next character and advances position.
    fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(ch) if ch.is_whitespace()) {
            self.position += 1;
        }
    }

    /// Expects a specific character and advances, or returns an error.
    fn expect(&mut self, expected: char) -> Result<(), PathError> {
        self.skip_whitespace();
        let pos = self.position;
        match self.next() {
            Some(ch) if ch == expected => Ok(()),
            Some(ch) => Err(PathError::UnexpectedToken {
                position: pos,
                found: ch.to_string(),
                expected: format!("'{}'", expected),
            }),
            None => Err(PathError::UnexpectedEnd {
                expected: format!("'{}'", expected),
            }),
        }
    }

    /// Reads a bare word: everything up to a separator or whitespace.
    fn read_word(&mut self) -> String {
        let mut word = String::new();
        while let Some(ch) = self.peek() {
            if ch == '.' || ch == '[' || ch == ']' || ch.is_whitespace() {
                break;
            }
            word.push(ch);
            self.next();
        }
        word
    }

    /// Reads a non-empty bare word or reports what was found instead.
    fn expect_word(&mut self, what: &str) -> Result<String, PathError> {
        let pos = self.position;
        let word = self.read_word();
        if !word.is_empty() {
            return Ok(word);
        }
        match self.peek() {
            Some(ch) => Err(PathError::UnexpectedToken {
                position: pos,
                found: ch.to_string(),
                expected: what.to_string(),
            }),
            None => Err(PathError::UnexpectedEnd {
                expected: what.to_string(),
            }),
        }
    }

    /// Parses a dotted segment: `name`, `:name` or `~`.
    fn parse_name(&mut self) -> Result<Key, PathError> {
        self.skip_whitespace();
        if self.peek() == Some('[') {
            return self.parse_bracket_expression();
        }
        let word = self.expect_word("key name")?;
        if word == "~" {
            return Ok(Key::Null);
        }
        match word.strip_prefix(':') {
            Some("") => Err(PathError::InvalidSyntax {
                message: "Symbol name cannot be empty".to_string(),
            }),
            Some(name) => Ok(Key::Symbol(Symbol::new(name))),
            None => Ok(Key::String(word)),
        }
    }

    /// Parses a bracket expression: `['key']`, `[:name]`, `[42]`, `[NaN]`, `[true]`, `[null]`.
    fn parse_bracket_expression(&mut self) -> Result<Key, PathError> {
        self.expect('[')?;
        self.skip_whitespace();

        let key = match self.peek() {
            Some('\'') | Some('"') => Key::String(self.parse_quoted()?),
            Some(':') => {
                self.next();
                let name = match self.peek() {
                    Some('\'') | Some('"') => self.parse_quoted()?,
                    _ => self.expect_word("symbol name")?,
                };
                Key::Symbol(Symbol::new(name))
            }
            Some('-') | Some('+') | Some('0'..='9') => self.parse_number()?,
            Some(_) => {
                let pos = self.position;
                let word = self.expect_word("bracket key")?;
                match word.as_str() {
                    "true" => Key::Bool(true),
                    "false" => Key::Bool(false),
                    "null" | "~" => Key::Null,
                    "NaN" => Key::from(f64::NAN),
                    "inf" => Key::from(f64::INFINITY),
                    _ => {
                        return Err(PathError::InvalidSyntax {
                            message: format!(
                                "Unquoted bracket key '{}' at position {}; quote string keys",
                                word, pos
                            ),
                        })
                    }
                }
            }
            None => {
                return Err(PathError::UnexpectedEnd {
                    expected: "bracket key".to_string(),
                })
            }
        };

        self.expect(']')?;
        Ok(key)
    }

    /// Parses a single- or double-quoted string with backslash escapes.
    fn parse_quoted(&mut self) -> Result<String, PathError> {
        let quote = match self.next() {
            Some(ch @ ('\'' | '"')) => ch,
            _ => {
                return Err(PathError::InvalidSyntax {
                    message: "Expected quoted string".to_string(),
                })
            }
        };

        let mut value = String::new();
        loop {
            match self.next() {
                Some(ch) if ch == quote => break,
                Some('\\') => match self.next() {
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some('r') => value.push('\r'),
                    Some('\\') => value.push('\\'),
                    Some('\'') => value.push('\''),
                    Some('"') => value.push('"'),
                    Some(_) | None => {
                        return Err(PathError::InvalidSyntax {
                            message: "Invalid escape sequence".to_string(),
                        })
                    }
                },
                Some(ch) => value.push(ch),
                None => {
                    return Err(PathError::UnexpectedEnd {
                        expected: format!("closing quote '{}'", quote),
                    })
                }
            }
        }
        Ok(value)
    }

    /// Parses an integer or float key, including `-inf` and `+inf`.
    fn parse_number(&mut self) -> Result<Key, PathError> {
        let mut num = String::new();
        if let Some(sign @ ('-' | '+')) = self.peek() {
            num.push(sign);
            self.next();
            if self.peek() == Some('i') {
                num.push_str(&self.read_word());
                return match num.as_str() {
                    "-inf" => Ok(Key::from(f64::NEG_INFINITY)),
                    "+inf" => Ok(Key::from(f64::INFINITY)),
                    _ => Err(PathError::InvalidSyntax {
                        message: format!("Invalid number: {}", num),
                    }),
                };
            }
        }
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | 'e' | 'E') {
                num.push(ch);
                self.next();
            } else {
                break;
            }
        }

        let invalid = || PathError::InvalidSyntax {
            message: format!("Invalid number: {}", num),
        };
        if num.contains(&['.', 'e', 'E'][..]) {
            num.parse::<f64>().map(Key::from).map_err(|_| invalid())
        } else {
            num.parse::<i64>().map(Key::Integer).map_err(|_| invalid())
        }
    }
}

/// Returns true if `s` can be written as a dotted segment and read back as
/// the same string key.
fn is_bare_string(s: &str) -> bool {
    !s.is_empty()
        && s != "~"
        && !s.starts_with(':')
        && !s.starts_with('$')
        && !s
            .chars()
            .any(|ch| ch == '.' || ch == '[' || ch == ']' || ch.is_whitespace())
}

fn quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('\'');
    for ch in s.chars() {
        match ch {
            '\'' => quoted.push_str("\\'"),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            other => quoted.push(other),
        }
    }
    quoted.push('\'');
    quoted
}

/// Renders keys as a path expression that parses back to the same keys.
///
/// The empty path renders as `$`.
pub fn format_path(keys: &[Key]) -> String {
    if keys.is_empty() {
        return "$".to_string();
    }

    let mut out = String::new();
    for key in keys {
        let dotted = match key {
            Key::String(s) if is_bare_string(s) => Some(s.clone()),
            Key::Symbol(sym) if is_bare_string(sym.as_str()) => Some(sym.to_string()),
            Key::Null => Some("~".to_string()),
            _ => None,
        };
        match dotted {
            Some(segment) => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(&segment);
            }
            None => {
                let inner = match key {
                    Key::String(s) => quote(s),
                    Key::Symbol(sym) => format!(":{}", quote(sym.as_str())),
                    other => other.to_string(),
                };
                out.push('[');
                out.push_str(&inner);
                out.push(']');
            }
        }
    }
    out
}
