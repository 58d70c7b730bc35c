use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bit-packed access and kind modifiers for classes, fields and methods.
///
/// Values follow the container's `access_flags` encoding. Several bits are shared
/// between member kinds (`VOLATILE`/`BRIDGE`, `TRANSIENT`/`VARARGS`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessFlags(pub u32);

impl AccessFlags {
    pub const NONE: AccessFlags = AccessFlags(0);
    pub const PUBLIC: AccessFlags = AccessFlags(0x1);
    pub const PRIVATE: AccessFlags = AccessFlags(0x2);
    pub const PROTECTED: AccessFlags = AccessFlags(0x4);
    pub const STATIC: AccessFlags = AccessFlags(0x8);
    pub const FINAL: AccessFlags = AccessFlags(0x10);
    pub const SYNCHRONIZED: AccessFlags = AccessFlags(0x20);
    pub const VOLATILE: AccessFlags = AccessFlags(0x40);
    pub const BRIDGE: AccessFlags = AccessFlags(0x40);
    pub const TRANSIENT: AccessFlags = AccessFlags(0x80);
    pub const VARARGS: AccessFlags = AccessFlags(0x80);
    pub const NATIVE: AccessFlags = AccessFlags(0x100);
    pub const INTERFACE: AccessFlags = AccessFlags(0x200);
    pub const ABSTRACT: AccessFlags = AccessFlags(0x400);
    pub const STRICT: AccessFlags = AccessFlags(0x800);
    pub const SYNTHETIC: AccessFlags = AccessFlags(0x1000);
    pub const ANNOTATION: AccessFlags = AccessFlags(0x2000);
    pub const ENUM: AccessFlags = AccessFlags(0x4000);
    pub const CONSTRUCTOR: AccessFlags = AccessFlags(0x10000);
    pub const DECLARED_SYNCHRONIZED: AccessFlags = AccessFlags(0x20000);

    /// Keyword spellings accepted by [`AccessFlags::from_keywords`].
    const KEYWORDS: &'static [(&'static str, AccessFlags)] = &[
        ("public", AccessFlags::PUBLIC),
        ("private", AccessFlags::PRIVATE),
        ("protected", AccessFlags::PROTECTED),
        ("static", AccessFlags::STATIC),
        ("final", AccessFlags::FINAL),
        ("synchronized", AccessFlags::SYNCHRONIZED),
        ("volatile", AccessFlags::VOLATILE),
        ("bridge", AccessFlags::BRIDGE),
        ("transient", AccessFlags::TRANSIENT),
        ("varargs", AccessFlags::VARARGS),
        ("native", AccessFlags::NATIVE),
        ("interface", AccessFlags::INTERFACE),
        ("abstract", AccessFlags::ABSTRACT),
        ("strict", AccessFlags::STRICT),
        ("synthetic", AccessFlags::SYNTHETIC),
        ("annotation", AccessFlags::ANNOTATION),
        ("enum", AccessFlags::ENUM),
        ("constructor", AccessFlags::CONSTRUCTOR),
        ("declared-synchronized", AccessFlags::DECLARED_SYNCHRONIZED),
    ];

    pub const fn from_bits(bits: u32) -> Self {
        AccessFlags(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: AccessFlags) -> bool {
        (self.0 & other.0) == other.0
    }

    /// True if any bit of `other` is set.
    pub const fn intersects(self, other: AccessFlags) -> bool {
        (self.0 & other.0) != 0
    }

    pub const fn union(self, other: AccessFlags) -> AccessFlags {
        AccessFlags(self.0 | other.0)
    }

    /// Fold a list of keywords (`"public"`, `"static"`, ...) into a flag set.
    pub fn from_keywords<I, S>(keywords: I) -> Result<Self, AccessFlagsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        keywords.into_iter().try_fold(AccessFlags::NONE, |acc, kw| {
            let flag: AccessFlags = kw.as_ref().parse()?;
            Ok::<_, AccessFlagsError>(acc.union(flag))
        })
    }
}

impl std::ops::BitOr for AccessFlags {
    type Output = AccessFlags;

    fn bitor(self, rhs: AccessFlags) -> AccessFlags {
        self.union(rhs)
    }
}

impl FromStr for AccessFlags {
    type Err = AccessFlagsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        AccessFlags::KEYWORDS
            .iter()
            .find(|(name, _)| *name == needle)
            .map(|(_, flag)| *flag)
            .ok_or_else(|| AccessFlagsError::UnknownKeyword(s.to_string()))
    }
}

impl fmt::Display for AccessFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessFlagsError {
    #[error("Unknown access flag keyword '{0}'")]
    UnknownKeyword(String),
}
