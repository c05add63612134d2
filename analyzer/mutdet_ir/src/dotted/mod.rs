//! Fully-qualified dotted class names.
//!
//! `Dotted` is the identity of a class throughout the engine: session cache
//! key, finding location, and suppression target. Names are validated on
//! construction so every `Dotted` in flight is well-formed.

use std::fmt;
use std::sync::Arc;

/// A validated, fully-qualified dotted class name (e.g. `java.util.List`).
///
/// Internal (slashed) names such as `java/util/List` are normalised to the
/// dotted form. Cloning is cheap: the name is stored behind an `Arc<str>`.
#[derive(Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct Dotted(Arc<str>);

/// Why a class name was rejected.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum NameProblem {
    #[error("name is empty")]
    Empty,
    #[error("name has an empty segment")]
    EmptySegment,
    #[error("segment starts with a digit")]
    LeadingDigit,
    #[error("name contains the character {0:?}")]
    IllegalCharacter(char),
}

/// A class name that failed validation.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("invalid class name `{name}`: {problem}")]
pub struct InvalidName {
    pub name: String,
    pub problem: NameProblem,
}

impl Dotted {
    /// Parse and validate a class name in dotted or internal (slashed) form.
    pub fn new(name: &str) -> Result<Self, InvalidName> {
        let normalised = name.replace('/', ".");
        validate(&normalised).map_err(|problem| InvalidName {
            name: name.to_owned(),
            problem,
        })?;
        Ok(Dotted(Arc::from(normalised)))
    }

    /// The full dotted name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The last segment of the name (`List` for `java.util.List`).
    pub fn simple_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// The package portion, or `None` for classes in the default package.
    pub fn package(&self) -> Option<&str> {
        self.0.rsplit_once('.').map(|(package, _)| package)
    }
}

fn validate(name: &str) -> Result<(), NameProblem> {
    if name.is_empty() {
        return Err(NameProblem::Empty);
    }
    for segment in name.split('.') {
        let mut chars = segment.chars();
        let Some(first) = chars.next() else {
            return Err(NameProblem::EmptySegment);
        };
        if first.is_ascii_digit() {
            return Err(NameProblem::LeadingDigit);
        }
        for c in std::iter::once(first).chain(chars) {
            if !is_identifier_char(c) {
                return Err(NameProblem::IllegalCharacter(c));
            }
        }
    }
    Ok(())
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

impl fmt::Display for Dotted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Dotted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dotted({})", self.0)
    }
}

impl AsRef<str> for Dotted {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Dotted {
    type Err = InvalidName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dotted::new(s)
    }
}

impl TryFrom<String> for Dotted {
    type Error = InvalidName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Dotted::new(&value)
    }
}

impl From<Dotted> for String {
    fn from(value: Dotted) -> Self {
        value.0.as_ref().to_owned()
    }
}
