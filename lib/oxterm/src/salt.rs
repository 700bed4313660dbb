use crate::blank_node::BlankNode;
use rand::random;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use siphasher::sip128::{Hasher128, SipHasher24};
use std::fmt;
use std::hash::Hasher;
use std::str::FromStr;

/// A 128-bit token used to turn store-local blank node identifiers into shared [`BlankNode`]s.
///
/// The shared reference is `s`, the 32 lowercase hexadecimal digits of the salt, `_` and the local identifier.
/// The prefix has a fixed length so two distinct `(salt, local id)` pairs never give the same reference.
/// ```
/// use oxterm::Salt;
///
/// let salt = Salt::from_u128(0x2a);
/// let node = salt.blank_node("b0");
/// assert_eq!(node.unique_reference(), "s0000000000000000000000000000002a_b0");
/// assert_eq!(salt.local_id(&node), Some("b0"));
/// assert_eq!(Salt::from_u128(0x2b).local_id(&node), None);
/// ```
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Salt(u128);

impl Salt {
    /// A fresh random salt.
    #[inline]
    pub fn random() -> Self {
        Self(random())
    }

    #[inline]
    pub const fn from_u128(value: u128) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn as_u128(self) -> u128 {
        self.0
    }

    /// The shared blank node for `local_id` in the scope of this salt.
    #[inline]
    pub fn blank_node(self, local_id: &str) -> BlankNode {
        BlankNode::new_unchecked(format!("{}{local_id}", self.prefix()))
    }

    /// The local identifier `node` has been built from, if it has been built with this salt.
    pub fn local_id(self, node: &BlankNode) -> Option<&str> {
        node.unique_reference().strip_prefix(self.prefix().as_str())
    }

    /// Derives a sub-salt for a scope named by `discriminator`, like a graph name.
    ///
    /// The derivation is a SipHash-2-4 keyed by the salt so it is stable across processes.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn derive(self, discriminator: &str) -> Self {
        let mut hasher = SipHasher24::new_with_keys((self.0 >> 64) as u64, self.0 as u64);
        hasher.write(discriminator.as_bytes());
        Self(u128::from(hasher.finish128()))
    }

    fn prefix(self) -> String {
        format!("s{:032x}_", self.0)
    }
}

impl fmt::Display for Salt {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

impl FromStr for Salt {
    type Err = SaltParseError;

    /// Parses exactly 32 hexadecimal digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SaltParseError);
        }
        u128::from_str_radix(s, 16)
            .map(Self)
            .map_err(|_| SaltParseError)
    }
}

/// An error raised when parsing a [`Salt`] that is not made of 32 hexadecimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("A salt must be made of exactly 32 hexadecimal digits")]
pub struct SaltParseError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_salt_same_node() {
        let salt = Salt::random();
        assert_eq!(salt.blank_node("x"), salt.blank_node("x"));
        assert_ne!(salt.blank_node("x"), salt.blank_node("y"));
        assert_ne!(salt.blank_node("x"), Salt::random().blank_node("x"));
    }

    #[test]
    fn prefix_is_unambiguous() {
        let salt = Salt::from_u128(1);
        assert_ne!(salt.blank_node("_a"), Salt::from_u128(0x10).blank_node("a"));
        assert_eq!(salt.local_id(&salt.blank_node("")), Some(""));
        assert_eq!(salt.local_id(&BlankNode::new_unchecked("b0")), None);
    }

    #[test]
    fn derive_is_deterministic() {
        let salt = Salt::from_u128(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef);
        assert_eq!(salt.derive("<http://ex/g>"), salt.derive("<http://ex/g>"));
        assert_ne!(salt.derive("<http://ex/g>"), salt.derive("<http://ex/h>"));
        assert_ne!(salt.derive("<http://ex/g>"), salt);
        assert_ne!(
            salt.derive("<http://ex/g>"),
            Salt::from_u128(1).derive("<http://ex/g>")
        );
    }

    #[test]
    fn string_form() {
        let salt = Salt::random();
        assert_eq!(salt.to_string().len(), 32);
        assert_eq!(salt.to_string().parse::<Salt>().unwrap(), salt);
        assert_eq!(
            "000000000000000000000000000000FF".parse::<Salt>().unwrap(),
            Salt::from_u128(0xff)
        );
        "ff".parse::<Salt>().unwrap_err();
        "+0000000000000000000000000000000".parse::<Salt>().unwrap_err();
        "g0000000000000000000000000000000".parse::<Salt>().unwrap_err();
    }
}
