//! URL patterns
//!
//! A subset of the WHATWG URLPattern syntax, applied to the pathname:
//!
//! ```text
//! /books/:id          named segment
//! /books/:id(\d+)     named segment with a custom regex
//! /books/(\d+)        unnamed regex group
//! /books/*            unnamed wildcard
//! /books{/old}?       non-capturing group
//! /books/:id?         modifiers ?, * and + on any of the above
//! ```
//!
//! Scheme, host and port are matched exactly. Query and fragment always match.

use crate::error::{Error, Result};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use regex::Regex;
use url::Url;

/// Characters the URL parser percent-encodes in a path
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Regex of a named segment without a custom regex
const SEGMENT_REGEX: &str = "[^/]+?";

/// Regex of the `*` wildcard
const WILDCARD_REGEX: &str = ".*";

/// Scheme, host and port a pattern is pinned to
#[derive(Debug, Clone, PartialEq, Eq)]
struct Origin {
    scheme: String,
    host: Option<String>,
    port: Option<u16>,
}

impl Origin {
    fn of(url: &Url) -> Self {
        Self {
            scheme: url.scheme().to_string(),
            host: url.host_str().map(str::to_string),
            port: url.port(),
        }
    }

    fn matches(&self, url: &Url) -> bool {
        self.scheme == url.scheme() && self.host.as_deref() == url.host_str() && self.port == url.port()
    }
}

/// Groups captured by a successful match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    url: Url,
    params: Vec<(String, String)>,
}

impl RouteMatch {
    /// The matched URL
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Value of a named group, or of an unnamed group by its index ("0", "1", ...)
    ///
    /// `None` when the group is unknown or did not take part in the match.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All groups that took part in the match, in pattern order
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

/// Compiled URL pattern
#[derive(Debug, Clone)]
pub struct UrlPattern {
    origin: Origin,
    pathname: Regex,
    groups: Vec<String>,
}

impl UrlPattern {
    /// Compile a pattern
    ///
    /// `pattern` is either a full URL pattern (`https://host/path/:id`) or a
    /// pathname starting with `/`, which takes its scheme, host and port from
    /// `base`.
    pub fn new(pattern: &str, base: Option<&Url>) -> Result<Self> {
        let (origin, pathname) = match split_absolute(pattern) {
            Some((origin, pathname)) => (
                Url::parse(origin)
                    .map(|url| Origin::of(&url))
                    .map_err(|e| invalid(pattern, format!("invalid origin: {e}")))?,
                pathname,
            ),
            None => {
                let base = base.ok_or_else(|| {
                    invalid(pattern, "relative pattern requires a base URL".into())
                })?;
                if !pattern.starts_with('/') {
                    return Err(invalid(pattern, "pathname must start with '/'".into()));
                }
                (Origin::of(base), pattern)
            }
        };

        let mut compiler = Compiler::default();
        compiler
            .compile(pathname)
            .map_err(|reason| invalid(pattern, reason))?;

        let source = format!("^{}$", compiler.regex);
        let regex = Regex::new(&source).map_err(|e| invalid(pattern, e.to_string()))?;
        if regex.captures_len() != compiler.groups.len() + 1 {
            return Err(invalid(
                pattern,
                "regex groups must not contain capturing groups".into(),
            ));
        }

        Ok(Self {
            origin,
            pathname: regex,
            groups: compiler.groups,
        })
    }

    /// Match a URL against the pattern
    pub fn exec(&self, url: &Url) -> Option<RouteMatch> {
        if !self.origin.matches(url) {
            return None;
        }

        let captures = self.pathname.captures(url.path())?;
        let params = self
            .groups
            .iter()
            .enumerate()
            .filter_map(|(index, name)| {
                captures
                    .get(index + 1)
                    .map(|value| (name.clone(), value.as_str().to_string()))
            })
            .collect();

        Some(RouteMatch {
            url: url.clone(),
            params,
        })
    }

    /// Check whether a URL matches
    pub fn test(&self, url: &Url) -> bool {
        self.exec(url).is_some()
    }
}

fn invalid(pattern: &str, reason: String) -> Error {
    Error::PatternInvalid {
        pattern: pattern.to_string(),
        reason,
    }
}

/// Split `scheme://authority/path` into `scheme://authority/` and `/path`
fn split_absolute(pattern: &str) -> Option<(&str, &str)> {
    let scheme_end = pattern.find("://")?;
    let scheme = &pattern[..scheme_end];
    let valid_scheme = scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !valid_scheme {
        return None;
    }

    let authority_start = scheme_end + 3;
    match pattern[authority_start..].find('/') {
        Some(offset) => {
            let path_start = authority_start + offset;
            Some((&pattern[..path_start], &pattern[path_start..]))
        }
        None => Some((pattern, "/")),
    }
}

/// Pathname pattern to regex translation
#[derive(Default)]
struct Compiler {
    regex: String,
    groups: Vec<String>,
    /// Literal text not yet written to `regex`
    pending: String,
}

/// Repetition applied to a segment or group
#[derive(Clone, Copy, PartialEq, Eq)]
enum Modifier {
    None,
    Optional,
    ZeroOrMore,
    OneOrMore,
}

impl Compiler {
    fn compile(&mut self, pathname: &str) -> std::result::Result<(), String> {
        let mut chars = pathname.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\\' => {
                    let escaped = chars.next().ok_or("trailing escape character")?;
                    self.pending.push(escaped);
                }
                ':' => {
                    let mut name = String::new();
                    while let Some(&next) = chars.peek() {
                        if next.is_ascii_alphanumeric() || next == '_' {
                            name.push(next);
                            chars.next();
                        } else {
                            break;
                        }
                    }
                    if name.is_empty() {
                        return Err("missing parameter name after ':'".into());
                    }
                    if self.groups.contains(&name) {
                        return Err(format!("duplicate parameter name '{name}'"));
                    }
                    let regex = if chars.peek() == Some(&'(') {
                        chars.next();
                        read_regex(&mut chars)?
                    } else {
                        SEGMENT_REGEX.to_string()
                    };
                    let modifier = read_modifier(&mut chars);
                    self.segment(name, &regex, modifier);
                }
                '(' => {
                    let regex = read_regex(&mut chars)?;
                    let modifier = read_modifier(&mut chars);
                    let name = self.next_unnamed();
                    self.segment(name, &regex, modifier);
                }
                '*' => {
                    let modifier = read_modifier(&mut chars);
                    let name = self.next_unnamed();
                    self.segment(name, WILDCARD_REGEX, modifier);
                }
                '{' => {
                    self.flush();
                    let mut inner = Compiler {
                        groups: std::mem::take(&mut self.groups),
                        ..Compiler::default()
                    };
                    let mut body = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some('{') => return Err("nested groups are not supported".into()),
                            Some('\\') => {
                                body.push('\\');
                                body.push(chars.next().ok_or("trailing escape character")?);
                            }
                            Some(other) => body.push(other),
                            None => return Err("unterminated group".into()),
                        }
                    }
                    inner.compile(&body)?;
                    self.groups = inner.groups;
                    let group = format!("(?:{})", inner.regex);
                    self.regex.push_str(&group);
                    self.regex.push_str(match read_modifier(&mut chars) {
                        Modifier::None => "",
                        Modifier::Optional => "?",
                        Modifier::ZeroOrMore => "*",
                        Modifier::OneOrMore => "+",
                    });
                }
                other => self.pending.push(other),
            }
        }

        self.flush();
        Ok(())
    }

    /// Name of the next unnamed group
    fn next_unnamed(&self) -> String {
        let count = self
            .groups
            .iter()
            .filter(|name| name.parse::<usize>().is_ok())
            .count();
        count.to_string()
    }

    /// Write pending literal text, encoded the way `Url::path` serializes it
    fn flush(&mut self) {
        if !self.pending.is_empty() {
            let encoded = utf8_percent_encode(&self.pending, PATH).to_string();
            self.regex.push_str(&regex::escape(&encoded));
            self.pending.clear();
        }
    }

    /// Emit a capturing segment; a '/' right before a repeated or optional
    /// segment becomes part of it
    fn segment(&mut self, name: String, regex: &str, modifier: Modifier) {
        let prefix = if modifier != Modifier::None && self.pending.ends_with('/') {
            self.pending.pop();
            "/"
        } else {
            ""
        };
        self.flush();

        let prefix = regex::escape(prefix);
        let group = match modifier {
            Modifier::None => format!("({regex})"),
            Modifier::Optional => format!("(?:{prefix}({regex}))?"),
            Modifier::OneOrMore => {
                format!("(?:{prefix}((?:{regex})(?:{prefix}(?:{regex}))*))")
            }
            Modifier::ZeroOrMore => {
                format!("(?:{prefix}((?:{regex})(?:{prefix}(?:{regex}))*))?")
            }
        };
        self.regex.push_str(&group);
        self.groups.push(name);
    }
}

/// Read a regex body up to its closing ')', the opening '(' already consumed
fn read_regex(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
) -> std::result::Result<String, String> {
    let mut regex = String::new();
    let mut depth = 0usize;

    loop {
        match chars.next() {
            Some('\\') => {
                regex.push('\\');
                regex.push(chars.next().ok_or("trailing escape character")?);
            }
            Some('(') => {
                depth += 1;
                regex.push('(');
            }
            Some(')') if depth == 0 => break,
            Some(')') => {
                depth -= 1;
                regex.push(')');
            }
            Some(other) => regex.push(other),
            None => return Err("unterminated regex group".into()),
        }
    }

    if regex.is_empty() {
        return Err("empty regex group".into());
    }
    Ok(regex)
}

fn read_modifier(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Modifier {
    let modifier = match chars.peek() {
        Some('?') => Modifier::Optional,
        Some('*') => Modifier::ZeroOrMore,
        Some('+') => Modifier::OneOrMore,
        _ => return Modifier::None,
    };
    chars.next();
    modifier
}
