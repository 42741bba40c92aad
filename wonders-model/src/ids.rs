use crate::error::ModelError;

/// Strongly typed catalog-wide card identifier.
///
/// Assigned sequentially (starting at 1) when the catalog is built, in
/// category declaration order. Unique across every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CardId(pub u32);

impl CardId {
    pub fn new(id: u32) -> Self {
        CardId(id)
    }

    /// Parses the string form used by the favorites document store.
    pub fn from_string(raw: &str) -> Result<Self, ModelError> {
        raw.trim()
            .parse::<u32>()
            .map(CardId)
            .map_err(|_| ModelError::InvalidCardId(raw.to_string()))
    }

    pub fn as_str(&self) -> String {
        self.0.to_string()
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque user identity handed out by the external auth backend.
///
/// The favorites document for a user is keyed by this exact string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        UserId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        UserId(id.to_string())
    }
}
