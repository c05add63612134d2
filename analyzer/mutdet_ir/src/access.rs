//! Access modifiers for classes, fields, constructors and methods.
//!
//! Bit values match the class file format so a decoder can pass its raw
//! `access_flags` straight through with `AccessFlags::from_bits_truncate`.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Access and property modifiers.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct AccessFlags: u16 {
        const PUBLIC = 0x0001;
        const PRIVATE = 0x0002;
        const PROTECTED = 0x0004;
        const STATIC = 0x0008;
        const FINAL = 0x0010;
        const INTERFACE = 0x0200;
        const ABSTRACT = 0x0400;
        const SYNTHETIC = 0x1000;
        const ENUM = 0x4000;
    }
}

impl AccessFlags {
    pub fn is_final(self) -> bool {
        self.contains(AccessFlags::FINAL)
    }

    pub fn is_static(self) -> bool {
        self.contains(AccessFlags::STATIC)
    }

    pub fn is_private(self) -> bool {
        self.contains(AccessFlags::PRIVATE)
    }

    /// The declared visibility. Absence of all three visibility bits means
    /// package-private.
    pub fn visibility(self) -> Visibility {
        if self.contains(AccessFlags::PUBLIC) {
            Visibility::Public
        } else if self.contains(AccessFlags::PROTECTED) {
            Visibility::Protected
        } else if self.contains(AccessFlags::PRIVATE) {
            Visibility::Private
        } else {
            Visibility::Package
        }
    }
}

/// Declared visibility of a member or class.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    Public,
    Protected,
    Package,
    Private,
}

impl Visibility {
    /// Whether code outside the declaring class can see the member.
    pub fn is_published(self) -> bool {
        !matches!(self, Visibility::Private)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Protected => write!(f, "protected"),
            Visibility::Package => write!(f, "package-private"),
            Visibility::Private => write!(f, "private"),
        }
    }
}
