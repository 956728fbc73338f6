use std::fmt;

use crate::entity::theme::{Color, BCP_BLUE, YAPE_PURPLE};

/// Payment provider a deposit came through.
///
/// Known providers get their brand color; everything else is carried as
/// `Other` with the stored tag so classification never fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Dominio {
    Yape,
    Bcp,
    Other(String),
}

impl Dominio {
    // Case-insensitive, total. Surrounding whitespace is part of the tag.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "yape" => Self::Yape,
            "bcp" => Self::Bcp,
            other => Self::Other(other.to_string()),
        }
    }

    /// Provider of a captured notification, guessed from the Android package
    /// name. Yape's package lives under the BCP namespace, so it is checked first.
    pub fn from_package_name(package_name: &str) -> Option<Self> {
        let package_name = package_name.to_lowercase();
        if package_name.contains("yape") {
            Some(Self::Yape)
        } else if package_name.contains("bcp") {
            Some(Self::Bcp)
        } else {
            None
        }
    }

    pub fn brand_color(&self) -> Option<Color> {
        match self {
            Self::Yape => Some(YAPE_PURPLE),
            Self::Bcp => Some(BCP_BLUE),
            Self::Other(_) => None,
        }
    }

    pub fn color_or(&self, default: Color) -> Color {
        self.brand_color().unwrap_or(default)
    }
}

impl From<&str> for Dominio {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for Dominio {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Yape => write!(f, "yape"),
            Self::Bcp => write!(f, "bcp"),
            Self::Other(tag) => write!(f, "{}", tag),
        }
    }
}

/// Display color for a stored `dominio` tag. Missing or unknown tags fall
/// back to `default`.
pub fn dominio_color(dominio: Option<&str>, default: Color) -> Color {
    dominio
        .map(|tag| Dominio::parse(tag).color_or(default))
        .unwrap_or(default)
}
