use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Canonical unit code.
///
/// Codes are trimmed and upper-cased on construction, so `fit5136`, ` FIT5136 ` and
/// `FIT5136` all address the same unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct UnitCode(String);

impl UnitCode {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_ascii_uppercase())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for UnitCode {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for UnitCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<UnitCode> for String {
    fn from(value: UnitCode) -> Self {
        value.0
    }
}

impl AsRef<str> for UnitCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An enrollable unit. Immutable once created; identity is its [`UnitCode`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    code: UnitCode,
    title: String,
    credit_points: u32,
}

impl Unit {
    pub fn new(code: impl Into<UnitCode>, title: impl Into<String>, credit_points: u32) -> Self {
        Self { code: code.into(), title: title.into(), credit_points }
    }

    #[must_use]
    pub const fn code(&self) -> &UnitCode {
        &self.code
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn credit_points(&self) -> u32 {
        self.credit_points
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Unit {}

impl Hash for Unit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({} credit points)", self.code, self.title, self.credit_points)
    }
}
