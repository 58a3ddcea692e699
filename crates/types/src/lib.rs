/// Errors that can occur when creating validated identifier types.
#[derive(Debug, thiserror::Error)]
pub enum GidTokenError {
    /// The input text was empty
    #[error("GID cannot be empty")]
    Empty,
    /// The input contained a character outside the RFC 4648 base-32 alphabet
    #[error("GID contains invalid symbol '{0}' (expected A-Z or 2-7)")]
    InvalidSymbol(char),
}

/// An opaque GID token.
///
/// This type wraps a `String` and guarantees the content is a non-empty
/// sequence of uppercase RFC 4648 base-32 symbols (`A`-`Z`, `2`-`7`).
/// GIDs are produced by the core encoder and accepted back from callers
/// for pseudonym resolution; validating at the boundary means the core
/// never has to re-check the alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Gid(String);

impl Gid {
    /// Creates a new `Gid` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. The trimmed
    /// result must be non-empty and contain only uppercase base-32 symbols.
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted to a string reference
    ///
    /// # Returns
    ///
    /// Returns `Ok(Gid)` if the trimmed input is a valid token, or a
    /// `GidTokenError` describing the first violation found.
    pub fn new(input: impl AsRef<str>) -> Result<Self, GidTokenError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(GidTokenError::Empty);
        }
        if let Some(bad) = trimmed
            .chars()
            .find(|c| !matches!(c, 'A'..='Z' | '2'..='7'))
        {
            return Err(GidTokenError::InvalidSymbol(bad));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of base-32 symbols in the token.
    pub fn symbol_count(&self) -> usize {
        self.0.len()
    }
}

impl std::fmt::Display for Gid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Gid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for Gid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Gid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Gid::new(&s).map_err(serde::de::Error::custom)
    }
}
