//! Switch-aware parameter store.
//!
//! This module provides [`Parameters`], an ordered sequence of command-line
//! tokens combined with a set of switch prefixes. Named lookups resolve a
//! bare name against each configured prefix in order, typed accessors fall
//! back to caller-supplied defaults instead of erroring, and positional
//! mutation keeps a name token and its value span contiguous.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::tokenizer::tokenize;

/// Switch prefixes recognized by default.
pub const DEFAULT_SWITCHES: &[&str] = &["-", "--", "/"];

/// An ordered, mutable sequence of command-line tokens plus the switch
/// prefixes that mark a token as a parameter name.
#[derive(Debug, Clone)]
pub struct Parameters {
    tokens: Vec<String>,
    switches: Vec<String>,
}

impl Default for Parameters {
    fn default() -> Self {
        Self::new()
    }
}

impl Parameters {
    /// Create an empty store with the default switch prefixes.
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            switches: DEFAULT_SWITCHES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Parse a raw command-line string with the default switch prefixes.
    pub fn parse(raw: &str) -> Self {
        Self {
            tokens: tokenize(raw),
            ..Self::new()
        }
    }

    /// Parse a raw command-line string with a custom switch set.
    ///
    /// An empty switch set is valid: no token is then recognized as a flag
    /// boundary and named lookups use the bare name.
    pub fn parse_with_switches(raw: &str, switches: Vec<String>) -> Self {
        Self {
            tokens: tokenize(raw),
            switches,
        }
    }

    /// Build a store from tokens that are already split.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            ..Self::new()
        }
    }

    /// Build a store from an argument vector split by the OS.
    ///
    /// The arguments are taken verbatim, no re-tokenization happens.
    pub fn from_args(args: &[String]) -> Self {
        Self::from_tokens(args.iter().cloned())
    }

    /// Replace the switch set on this store.
    pub fn with_switches(mut self, switches: Vec<String>) -> Self {
        self.switches = switches;
        self
    }

    /// The token sequence in order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The configured switch prefixes.
    pub fn switches(&self) -> &[String] {
        &self.switches
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Append a token to the end of the sequence.
    pub fn push(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    /// Index of the first token matching `name` under any configured
    /// prefix.
    ///
    /// Prefixes are tried in switch-set order and the first prefix with a
    /// hit wins, so `-x` is found before `--x` under the default set. With
    /// an empty switch set the bare name is matched.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        let empty = [String::new()];
        let prefixes: &[String] = if self.switches.is_empty() {
            &empty
        } else {
            &self.switches
        };

        for prefix in prefixes {
            let target = format!("{}{}", prefix, name);
            if let Some(index) = self.tokens.iter().position(|t| *t == target) {
                return Some(index);
            }
        }

        None
    }

    /// Whether a parameter with the given name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Whether parameters with the given names are present.
    ///
    /// Historical semantics: despite the name this is true only when
    /// every supplied name is present.
    pub fn contains_any<I, S>(&self, names: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().all(|name| self.contains(name.as_ref()))
    }

    /// Whether a token is recognized as a flag boundary.
    ///
    /// A token is a boundary when the switch set is empty (trivially) or
    /// when it starts with any configured prefix. Used to terminate value
    /// collection in [`Parameters::as_strings`].
    pub fn is_flag(&self, token: &str) -> bool {
        self.switches.is_empty() || self.switches.iter().any(|s| token.starts_with(s.as_str()))
    }

    /// The values following `name`, up to the next boundary token or the
    /// end of the sequence.
    ///
    /// Returns `defaults` verbatim when no values were collected. With an
    /// empty switch set the boundary check is skipped entirely and
    /// collection runs to the end of the sequence.
    pub fn as_strings(&self, name: &str, defaults: &[&str]) -> Vec<String> {
        let mut result = Vec::new();

        if let Some(start) = self.index_of(name) {
            let mut index = start;

            while index + 1 < self.tokens.len() {
                let next = &self.tokens[index + 1];

                if self.is_flag(next) && !self.switches.is_empty() {
                    break;
                }

                result.push(next.clone());
                index += 1;
            }
        }

        if result.is_empty() {
            result.extend(defaults.iter().map(|d| d.to_string()));
        }

        result
    }

    /// The first value following `name`, or `default` when there is none.
    pub fn as_string(&self, name: &str, default: &str) -> String {
        self.as_strings(name, &[default])
            .into_iter()
            .next()
            .unwrap_or_default()
    }

    /// The first value parsed as an integer, or `default` on a missing or
    /// malformed value. Never errors.
    pub fn as_integer(&self, name: &str, default: i64) -> i64 {
        self.as_string(name, "").parse().unwrap_or(default)
    }

    /// The first value parsed as a boolean, or `default` on a missing or
    /// malformed value.
    ///
    /// Accepts `true`/`false`, `yes`/`no`, `1`/`0` and `on`/`off` in any
    /// case.
    pub fn as_bool(&self, name: &str, default: bool) -> bool {
        parse_bool(&self.as_string(name, "")).unwrap_or(default)
    }

    /// The first value parsed as a date/time, or `default` on a missing or
    /// malformed value.
    pub fn as_datetime(&self, name: &str, default: DateTime<Utc>) -> DateTime<Utc> {
        parse_datetime(&self.as_string(name, "")).unwrap_or(default)
    }

    /// The first value converted through [`FromStr`].
    ///
    /// `None` when the name is absent or the value does not parse.
    pub fn as_custom<T: FromStr>(&self, name: &str) -> Option<T> {
        if !self.contains(name) {
            return None;
        }

        self.as_string(name, "").parse().ok()
    }

    /// The token at `index` converted through [`FromStr`].
    pub fn as_custom_at<T: FromStr>(&self, index: usize) -> Option<T> {
        self.tokens.get(index)?.parse().ok()
    }

    /// Whether `name` has at least one collected value.
    pub fn has_value(&self, name: &str) -> bool {
        !self.as_strings(name, &[]).is_empty()
    }

    /// Delete the name token and its value span in place.
    ///
    /// No-op when the name is absent.
    pub fn remove(&mut self, name: &str) {
        if let Some(index) = self.index_of(name) {
            let length = self.as_strings(name, &[]).len() + 1;
            self.tokens.drain(index..index + length);
        }
    }

    /// Splice `values` over the previous value span of `name`, keeping the
    /// name token in place.
    ///
    /// With an empty switch set there is no name/value distinction: the
    /// name token itself is replaced and the values inserted at its
    /// position. No-op when the name is absent.
    pub fn replace(&mut self, name: &str, values: &[&str]) {
        let Some(index) = self.index_of(name) else {
            return;
        };

        let replacement = values.iter().map(|v| v.to_string());

        if !self.switches.is_empty() {
            let length = self.as_strings(name, &[]).len();
            self.tokens.splice(index + 1..index + 1 + length, replacement);
        } else {
            self.tokens.splice(index..index + 1, replacement);
        }
    }
}

impl fmt::Display for Parameters {
    /// Re-serialize the token sequence, quoting any token containing a
    /// space. Round-trips through the tokenizer for tokens without
    /// embedded quote characters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }

            if token.contains(' ') {
                write!(f, "\"{}\"", token)?;
            } else {
                f.write_str(token)?;
            }
        }

        Ok(())
    }
}

/// Lenient boolean forms shared by the accessors and the binder.
pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Some(true),
        "false" | "no" | "0" | "off" => Some(false),
        _ => None,
    }
}

/// Multi-format date/time parsing shared by the accessors and the binder.
///
/// Tries RFC 3339 and RFC 2822 first, then a set of common date and
/// date/time formats interpreted as UTC.
pub(crate) fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.with_timezone(&Utc));
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S", // 2025-01-01 13:45:30
        "%Y-%m-%dT%H:%M:%S", // 2025-01-01T13:45:30
    ];

    for format in &datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(Utc.from_utc_datetime(&dt));
        }
    }

    let date_formats = [
        "%Y-%m-%d", // 2025-01-01
        "%Y/%m/%d", // 2025/01/01
        "%d/%m/%Y", // 31/01/2025
        "%m/%d/%Y", // 01/31/2025
    ];

    for format in &date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            let midnight = date.and_hms_opt(0, 0, 0)?;
            return Some(Utc.from_utc_datetime(&midnight));
        }
    }

    None
}
