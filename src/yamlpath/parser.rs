//! YAMLPath query string parser.
//!
//! Accepts plain paths (`$.a.b`, `.a.b`, `a` is not valid) as well as
//! kubectl-style templates wrapped in braces (`{.a.b}`).

use super::ast::{PathSegment, YamlPath};
use super::error::YamlPathError;

/// Parser for YAMLPath query strings.
pub struct Parser {
    input: Vec<char>,
    position: usize,
}

impl Parser {
    /// Creates a new parser for the given query string.
    pub fn new(query: &str) -> Self {
        Self {
            input: query.chars().collect(),
            position: 0,
        }
    }

    /// Parses the query string into a YamlPath.
    ///
    /// A blank query selects the current value.
    pub fn parse(query: &str) -> Result<YamlPath, YamlPathError> {
        let mut parser = Parser::new(query);
        parser.parse_query()
    }

    fn parse_query(&mut self) -> Result<YamlPath, YamlPathError> {
        self.skip_whitespace();
        if self.is_eof() {
            return Ok(YamlPath::current());
        }

        let braced = self.peek() == Some('{');
        if braced {
            self.next();
        }

        let path = self.parse_path(braced)?;

        if braced {
            self.expect('}')?;
        }

        self.skip_whitespace();
        if let Some(ch) = self.peek() {
            return Err(YamlPathError::UnexpectedToken {
                position: self.position,
                found: ch.to_string(),
                expected: "end of input".to_string(),
            });
        }

        Ok(path)
    }

    fn parse_path(&mut self, braced: bool) -> Result<YamlPath, YamlPathError> {
        let mut segments = Vec::new();

        self.skip_whitespace();

        // Optional current-value marker
        if matches!(self.peek(), Some('$') | Some('@')) {
            self.next();
        }

        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('.') => {
                    self.next();
                    if self.peek() == Some('.') {
                        segments.push(self.parse_recursive_descent()?);
                        continue;
                    }
                    self.skip_whitespace();
                    match self.peek() {
                        Some('*') => {
                            self.next();
                            segments.push(PathSegment::Wildcard);
                        }
                        _ if segments.is_empty() && self.at_path_end(braced) => {
                            // A lone "." names the current value.
                            break;
                        }
                        _ => {
                            let name = self.parse_identifier()?;
                            segments.push(PathSegment::Child(name));
                        }
                    }
                }
                Some('[') => {
                    segments.push(self.parse_bracket_expression()?);
                }
                Some('}') if braced => break,
                None => break,
                Some(ch) => {
                    return Err(YamlPathError::UnexpectedToken {
                        position: self.position,
                        found: ch.to_string(),
                        expected: "'.' or '['".to_string(),
                    })
                }
            }
        }

        Ok(YamlPath::new(segments))
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Returns the next character and advances position.
    fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.next();
            } else {
                break;
            }
        }
    }

    /// Checks if we've reached the end of input.
    fn is_eof(&self) -> bool {
        self.position >= self.input.len()
    }

    /// True when only whitespace remains before the end of the path.
    fn at_path_end(&self, braced: bool) -> bool {
        let rest = self.input[self.position..]
            .iter()
            .find(|ch| !ch.is_whitespace());
        match rest {
            None => true,
            Some('}') => braced,
            Some(_) => false,
        }
    }

    /// Expects a specific character and advances, or returns an error.
    fn expect(&mut self, expected: char) -> Result<(), YamlPathError> {
        self.skip_whitespace();
        let pos = self.position;
        match self.next() {
            Some(ch) if ch == expected => Ok(()),
            Some(ch) => Err(YamlPathError::UnexpectedToken {
                position: pos,
                found: ch.to_string(),
                expected: format!("'{}'", expected),
            }),
            None => Err(YamlPathError::UnexpectedEnd {
                expected: format!("'{}'", expected),
            }),
        }
    }

    /// Parses an identifier (property name).
    fn parse_identifier(&mut self) -> Result<String, YamlPathError> {
        self.skip_whitespace();
        let mut name = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' || ch == '-' {
                name.push(ch);
                self.next();
            } else {
                break;
            }
        }
        if !name.is_empty() {
            return Ok(name);
        }
        match self.peek() {
            Some(ch) => Err(YamlPathError::UnexpectedToken {
                position: self.position,
                found: ch.to_string(),
                expected: "identifier".to_string(),
            }),
            None => Err(YamlPathError::UnexpectedEnd {
                expected: "identifier".to_string(),
            }),
        }
    }

    /// Parses recursive descent (..)
    fn parse_recursive_descent(&mut self) -> Result<PathSegment, YamlPathError> {
        self.expect('.')?;
        match self.peek() {
            // The bracket that follows applies to the current value too.
            Some('[') => Ok(PathSegment::DescendantOrSelf),
            Some('*') => {
                self.next();
                Ok(PathSegment::RecursiveDescent(None))
            }
            _ => {
                let name = self.parse_identifier()?;
                Ok(PathSegment::RecursiveDescent(Some(name)))
            }
        }
    }

    /// Parses bracket expression: [index], [start:end], ['key'], [*]
    fn parse_bracket_expression(&mut self) -> Result<PathSegment, YamlPathError> {
        self.expect('[')?;
        self.skip_whitespace();

        let segment = match self.peek() {
            Some('*') => {
                self.next();
                self.expect(']')?;
                PathSegment::Wildcard
            }
            Some('\'') | Some('"') => {
                let mut properties = self.parse_bracket_string()?;
                self.expect(']')?;
                match properties.pop() {
                    Some(only) if properties.is_empty() => PathSegment::Child(only),
                    Some(last) => {
                        properties.push(last);
                        PathSegment::MultiProperty(properties)
                    }
                    None => {
                        return Err(YamlPathError::InvalidSyntax {
                            message: "Expected property name".to_string(),
                        })
                    }
                }
            }
            Some('-') | Some('0'..='9') => {
                if self.bracket_contains_colon() {
                    self.parse_slice()?
                } else {
                    let idx = self.parse_bracket_number()?;
                    self.expect(']')?;
                    PathSegment::Index(idx)
                }
            }
            Some(':') => self.parse_slice()?,
            Some(ch) => {
                return Err(YamlPathError::UnexpectedToken {
                    position: self.position,
                    found: ch.to_string(),
                    expected: "index, slice, '*' or quoted name".to_string(),
                })
            }
            None => {
                return Err(YamlPathError::UnexpectedEnd {
                    expected: "']'".to_string(),
                })
            }
        };

        Ok(segment)
    }

    /// Looks ahead (without consuming) for a ':' before the closing bracket.
    fn bracket_contains_colon(&self) -> bool {
        self.input[self.position..]
            .iter()
            .take_while(|ch| **ch != ']')
            .any(|ch| *ch == ':')
    }

    /// Parses string(s) inside brackets: ['key'] or ['key1','key2']
    fn parse_bracket_string(&mut self) -> Result<Vec<String>, YamlPathError> {
        let mut properties = Vec::new();
        loop {
            self.skip_whitespace();
            let quote = match self.peek() {
                Some(q @ ('\'' | '"')) => {
                    self.next();
                    q
                }
                _ => break,
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
                            return Err(YamlPathError::InvalidSyntax {
                                message: "Invalid escape sequence".to_string(),
                            })
                        }
                    },
                    Some(ch) => value.push(ch),
                    None => {
                        return Err(YamlPathError::UnexpectedEnd {
                            expected: format!("closing quote '{}'", quote),
                        })
                    }
                }
            }
            properties.push(value);

            self.skip_whitespace();
            if self.peek() == Some(',') {
                self.next();
            } else {
                break;
            }
        }
        Ok(properties)
    }

    /// Parses a number inside brackets
    fn parse_bracket_number(&mut self) -> Result<isize, YamlPathError> {
        self.skip_whitespace();
        let num_str = self.parse_number_string()?;
        num_str
            .parse::<isize>()
            .map_err(|_| YamlPathError::InvalidSyntax {
                message: format!("Invalid number: {}", num_str),
            })
    }

    /// Parses a number as a string
    fn parse_number_string(&mut self) -> Result<String, YamlPathError> {
        let mut num = String::new();
        if self.peek() == Some('-') {
            num.push('-');
            self.next();
        }
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                num.push(ch);
                self.next();
            } else {
                break;
            }
        }
        if num.is_empty() || num == "-" {
            Err(YamlPathError::InvalidSyntax {
                message: "Expected number".to_string(),
            })
        } else {
            Ok(num)
        }
    }

    /// Parses array slice: [start:end], [start:], [:end], [:]
    fn parse_slice(&mut self) -> Result<PathSegment, YamlPathError> {
        let start = if self.peek() == Some(':') {
            None
        } else {
            Some(self.parse_bracket_number()?)
        };

        self.expect(':')?;
        self.skip_whitespace();

        let end = if self.peek() == Some(']') {
            None
        } else {
            Some(self.parse_bracket_number()?)
        };

        self.expect(']')?;

        if let (Some(s), Some(e)) = (start, end) {
            if s >= 0 && e >= 0 && s > e {
                return Err(YamlPathError::InvalidSyntax {
                    message: format!("Invalid slice: start ({}) > end ({})", s, e),
                });
            }
        }

        Ok(PathSegment::Slice(start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(query: &str) -> Vec<PathSegment> {
        Parser::parse(query).unwrap().segments
    }

    #[test]
    fn test_parse_empty_is_current() {
        assert!(Parser::parse("").unwrap().is_current());
        assert!(Parser::parse("   ").unwrap().is_current());
    }

    #[test]
    fn test_parse_markers_alone_are_current() {
        for query in ["$", "@", ".", "{}", "{.}", "{$}", "{ . }"] {
            assert!(
                Parser::parse(query).unwrap().is_current(),
                "{} should select the current value",
                query
            );
        }
    }

    #[test]
    fn test_parse_child() {
        assert_eq!(segments("$.store"), vec![PathSegment::Child("store".into())]);
        assert_eq!(segments(".store"), vec![PathSegment::Child("store".into())]);
        assert_eq!(segments("{.store}"), vec![PathSegment::Child("store".into())]);
    }

    #[test]
    fn test_parse_nested_child() {
        assert_eq!(
            segments("{.store.book}"),
            vec![
                PathSegment::Child("store".into()),
                PathSegment::Child("book".into())
            ]
        );
    }

    #[test]
    fn test_parse_array_index() {
        assert_eq!(
            segments("$.items[0]"),
            vec![PathSegment::Child("items".into()), PathSegment::Index(0)]
        );
        assert_eq!(segments("$.items[-1]")[1], PathSegment::Index(-1));
    }

    #[test]
    fn test_parse_wildcards() {
        assert_eq!(segments("$.items[*]")[1], PathSegment::Wildcard);
        assert_eq!(segments("$.items.*")[1], PathSegment::Wildcard);
    }

    #[test]
    fn test_parse_recursive_descent() {
        assert_eq!(
            segments("$..price"),
            vec![PathSegment::RecursiveDescent(Some("price".into()))]
        );
        assert_eq!(segments("$..*"), vec![PathSegment::RecursiveDescent(None)]);
    }

    #[test]
    fn test_parse_recursive_descent_before_bracket() {
        assert_eq!(
            segments("$..['a']"),
            vec![PathSegment::DescendantOrSelf, PathSegment::Child("a".into())]
        );
        assert_eq!(
            segments("{..[0]}"),
            vec![PathSegment::DescendantOrSelf, PathSegment::Index(0)]
        );
    }

    #[test]
    fn test_parse_whitespace_after_dot() {
        assert_eq!(segments("$. *"), vec![PathSegment::Wildcard]);
        assert_eq!(
            segments("{ .store. book }"),
            vec![
                PathSegment::Child("store".into()),
                PathSegment::Child("book".into())
            ]
        );
    }

    #[test]
    fn test_parse_slices() {
        assert_eq!(segments("$.items[1:3]")[1], PathSegment::Slice(Some(1), Some(3)));
        assert_eq!(segments("$.items[2:]")[1], PathSegment::Slice(Some(2), None));
        assert_eq!(segments("$.items[:5]")[1], PathSegment::Slice(None, Some(5)));
        assert_eq!(segments("$.items[-2:]")[1], PathSegment::Slice(Some(-2), None));
    }

    #[test]
    fn test_parse_bracket_notation() {
        assert_eq!(
            segments("$['store']['book']"),
            vec![
                PathSegment::Child("store".into()),
                PathSegment::Child("book".into())
            ]
        );
        assert_eq!(
            segments("$['with space']"),
            vec![PathSegment::Child("with space".into())]
        );
    }

    #[test]
    fn test_parse_multi_property() {
        assert_eq!(
            segments("$.store['book','music']")[1],
            PathSegment::MultiProperty(vec!["book".into(), "music".into()])
        );
    }

    #[test]
    fn test_parse_whitespace_handling() {
        assert_eq!(
            segments(" { $ . store [ 0 ] } "),
            vec![PathSegment::Child("store".into()), PathSegment::Index(0)]
        );
    }

    #[test]
    fn test_parse_unicode_identifier() {
        assert_eq!(segments(".größe"), vec![PathSegment::Child("größe".into())]);
    }

    #[test]
    fn test_parse_unbalanced_brace_fails() {
        assert!(matches!(
            Parser::parse("{.foo"),
            Err(YamlPathError::UnexpectedEnd { .. })
        ));
        assert!(matches!(
            Parser::parse(".foo}"),
            Err(YamlPathError::UnexpectedToken { .. })
        ));
    }

    #[test]
    fn test_parse_unbalanced_bracket_fails() {
        assert!(Parser::parse(".items[0").is_err());
        assert!(Parser::parse(".items[").is_err());
        assert!(Parser::parse(".items['a'").is_err());
    }

    #[test]
    fn test_parse_missing_marker_fails() {
        assert!(Parser::parse("store.book").is_err());
    }

    #[test]
    fn test_parse_trailing_garbage_fails() {
        let err = Parser::parse("$.a b").unwrap_err();
        assert_eq!(
            err,
            YamlPathError::UnexpectedToken {
                position: 4,
                found: "b".to_string(),
                expected: "'.' or '['".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_dangling_dot_after_segment_fails() {
        assert!(Parser::parse("$.a.").is_err());
    }

    #[test]
    fn test_parse_invalid_slice_fails() {
        assert!(Parser::parse("$.items[3:1]").is_err());
    }

    #[test]
    fn test_parse_bad_escape_fails() {
        assert!(matches!(
            Parser::parse(r"$['a\q']"),
            Err(YamlPathError::InvalidSyntax { .. })
        ));
    }
}
