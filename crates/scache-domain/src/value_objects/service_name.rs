//! Hierarchical service names
//!
//! A [`ServiceName`] is an ordered, non-empty list of segments. Its canonical
//! text form joins segments with `.`; segments that are empty or contain
//! `.`, `"` or `\` are written inside double quotes with `"` and `\`
//! escaped by a backslash. Parsing the canonical form yields the same name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const SEPARATOR: char = '.';
const QUOTE: char = '"';
const ESCAPE: char = '\\';

/// Hierarchical service identifier
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServiceName {
    segments: Vec<String>,
}

impl ServiceName {
    /// Create a single-segment name
    pub fn new(segment: impl Into<String>) -> Self {
        Self {
            segments: vec![segment.into()],
        }
    }

    /// Create a name from a sequence of segments
    ///
    /// Fails when the sequence is empty.
    pub fn of<I, S>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(Error::invalid_service_name("", "no segments"));
        }
        Ok(Self { segments })
    }

    /// Return a new name with the given segments appended
    pub fn append<I, S>(&self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut appended = self.segments.clone();
        appended.extend(segments.into_iter().map(Into::into));
        Self { segments: appended }
    }

    /// All segments, outermost first
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The last segment
    pub fn simple_name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// The name without its last segment, if any remain
    pub fn parent(&self) -> Option<ServiceName> {
        match self.segments.len() {
            0 | 1 => None,
            len => Some(Self {
                segments: self.segments[..len - 1].to_vec(),
            }),
        }
    }

    /// Whether this name is a strict ancestor of `other`
    pub fn is_parent_of(&self, other: &ServiceName) -> bool {
        other.segments.len() > self.segments.len() && other.segments.starts_with(&self.segments)
    }

    /// Canonical text form
    pub fn canonical_name(&self) -> String {
        let mut out = String::new();
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                out.push(SEPARATOR);
            }
            write_segment(&mut out, segment);
        }
        out
    }
}

fn needs_quotes(segment: &str) -> bool {
    segment.is_empty() || segment.contains([SEPARATOR, QUOTE, ESCAPE])
}

fn write_segment(out: &mut String, segment: &str) {
    if !needs_quotes(segment) {
        out.push_str(segment);
        return;
    }
    out.push(QUOTE);
    for c in segment.chars() {
        if c == QUOTE || c == ESCAPE {
            out.push(ESCAPE);
        }
        out.push(c);
    }
    out.push(QUOTE);
}

impl FromStr for ServiceName {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        if value.is_empty() {
            return Err(Error::invalid_service_name(value, "empty name"));
        }

        let mut segments = Vec::new();
        let mut chars = value.chars().peekable();

        loop {
            let mut segment = String::new();
            if chars.peek() == Some(&QUOTE) {
                chars.next();
                loop {
                    match chars.next() {
                        Some(ESCAPE) => match chars.next() {
                            Some(c) => segment.push(c),
                            None => {
                                return Err(Error::invalid_service_name(value, "dangling escape"));
                            }
                        },
                        Some(QUOTE) => break,
                        Some(c) => segment.push(c),
                        None => {
                            return Err(Error::invalid_service_name(value, "unterminated quote"));
                        }
                    }
                }
            } else {
                while let Some(&c) = chars.peek() {
                    if c == SEPARATOR {
                        break;
                    }
                    if c == QUOTE || c == ESCAPE {
                        return Err(Error::invalid_service_name(
                            value,
                            "quote or escape inside an unquoted segment",
                        ));
                    }
                    segment.push(c);
                    chars.next();
                }
                if segment.is_empty() {
                    return Err(Error::invalid_service_name(value, "empty segment"));
                }
            }
            segments.push(segment);

            match chars.next() {
                None => break,
                Some(SEPARATOR) if chars.peek().is_none() => {
                    return Err(Error::invalid_service_name(value, "empty segment"));
                }
                Some(SEPARATOR) => {}
                Some(c) => {
                    return Err(Error::invalid_service_name(
                        value,
                        format!("unexpected '{c}' after quoted segment"),
                    ));
                }
            }
        }

        Self::of(segments)
    }
}

impl TryFrom<String> for ServiceName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ServiceName> for String {
    fn from(name: ServiceName) -> Self {
        name.canonical_name()
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_name())
    }
}

impl fmt::Debug for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceName({})", self.canonical_name())
    }
}
