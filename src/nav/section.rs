//! Section identifiers and the fixed page registry.
//!
//! The page always carries the same six sections in the same order. Identifiers
//! are stable English tokens; display labels are the Portuguese headings shown
//! in the navigation bar.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VitaeError;

/// Identifier of one page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Experience,
    Skills,
    Education,
    Contact,
}

/// One entry of the section registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub id: SectionId,
    pub label: &'static str,
}

/// The fixed section registry, in page order.
pub const SECTIONS: [SectionDescriptor; SectionId::COUNT] = [
    SectionDescriptor { id: SectionId::Home, label: "Home" },
    SectionDescriptor { id: SectionId::About, label: "Sobre" },
    SectionDescriptor { id: SectionId::Experience, label: "Experiência" },
    SectionDescriptor { id: SectionId::Skills, label: "Habilidades" },
    SectionDescriptor { id: SectionId::Education, label: "Formação" },
    SectionDescriptor { id: SectionId::Contact, label: "Contato" },
];

impl SectionId {
    /// Number of sections on the page.
    pub const COUNT: usize = 6;

    /// All sections in page order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Home,
        Self::About,
        Self::Experience,
        Self::Skills,
        Self::Education,
        Self::Contact,
    ];

    /// Stable identifier token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Education => "education",
            Self::Contact => "contact",
        }
    }

    /// Display label for the navigation bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        SECTIONS[self.index()].label
    }

    /// Position in the registry.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Section at a registry position, if any.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Home),
            1 => Some(Self::About),
            2 => Some(Self::Experience),
            3 => Some(Self::Skills),
            4 => Some(Self::Education),
            5 => Some(Self::Contact),
            _ => None,
        }
    }

    /// Next section in page order, wrapping at the end.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Home => Self::About,
            Self::About => Self::Experience,
            Self::Experience => Self::Skills,
            Self::Skills => Self::Education,
            Self::Education => Self::Contact,
            Self::Contact => Self::Home,
        }
    }

    /// Previous section in page order, wrapping at the start.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Home => Self::Contact,
            Self::About => Self::Home,
            Self::Experience => Self::About,
            Self::Skills => Self::Experience,
            Self::Education => Self::Skills,
            Self::Contact => Self::Education,
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = VitaeError;

    /// Accepts the stable identifiers plus the Portuguese anchor names the
    /// page historically used (`sobre`, `experiencia`, `formacao`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "about" | "sobre" => Ok(Self::About),
            "experience" | "experiencia" | "experiência" => Ok(Self::Experience),
            "skills" | "habilidades" => Ok(Self::Skills),
            "education" | "formacao" | "formação" => Ok(Self::Education),
            "contact" | "contato" => Ok(Self::Contact),
            _ => Err(VitaeError::UnknownSection(s.to_string())),
        }
    }
}
