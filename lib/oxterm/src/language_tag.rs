use oxilangtag::LanguageTagParseError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;

/// A [BCP47](https://tools.ietf.org/html/bcp47) language tag attached to a [`Literal`](crate::Literal).
///
/// Tags keep the case they have been built with and compare case-sensitively.
/// [`LanguageTag::eq_ignore_ascii_case`] offers the case-insensitive comparison allowed by BCP47.
/// ```
/// use oxterm::LanguageTag;
///
/// let tag = LanguageTag::new("en-US")?;
/// assert_eq!(tag.as_str(), "en-US");
/// assert_ne!(tag, LanguageTag::new("en-us")?);
/// assert!(tag.eq_ignore_ascii_case(&LanguageTag::new("en-us")?));
/// # Result::<_,oxterm::LanguageTagParseError>::Ok(())
/// ```
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LanguageTag {
    tag: String,
}

impl LanguageTag {
    /// Builds a language tag, checking that it is well-formed according to BCP47.
    pub fn new(tag: impl Into<String>) -> Result<Self, LanguageTagParseError> {
        Ok(Self::new_unchecked(
            oxilangtag::LanguageTag::parse(tag.into())?.into_inner(),
        ))
    }

    /// Builds a language tag without validation.
    ///
    /// [`LanguageTag::new()`] is a safe version of this constructor and should be used for untrusted data.
    #[inline]
    pub fn new_unchecked(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.tag
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.tag
    }

    /// Compares two tags ignoring ASCII case.
    #[inline]
    pub fn eq_ignore_ascii_case(&self, other: &Self) -> bool {
        self.tag.eq_ignore_ascii_case(&other.tag)
    }
}

impl fmt::Display for LanguageTag {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl PartialEq<str> for LanguageTag {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.tag == other
    }
}

impl PartialEq<&str> for LanguageTag {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.tag == *other
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for LanguageTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Self::new(String::deserialize(deserializer)?).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation() {
        LanguageTag::new("fr").unwrap();
        LanguageTag::new("zh-Hant-TW").unwrap();
        LanguageTag::new("").unwrap_err();
        LanguageTag::new("en_US").unwrap_err();
        LanguageTag::new("-en").unwrap_err();
    }

    #[test]
    fn case_is_kept() {
        let tag = LanguageTag::new("EN-gb").unwrap();
        assert_eq!(tag, "EN-gb");
        assert_ne!(tag, LanguageTag::new_unchecked("en-gb"));
        assert!(tag.eq_ignore_ascii_case(&LanguageTag::new_unchecked("en-GB")));
    }
}
