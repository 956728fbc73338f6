use std::fmt;

/// Hex color as handed to the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub &'static str);

impl Color {
    pub fn hex(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub const YAPE_PURPLE: Color = Color("#6f42c1");
pub const BCP_BLUE: Color = Color("#0098d8");

/// Named colors the screens fall back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub tint: Color,
    pub secondary_text: Color,
    pub border: Color,
    pub background: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            tint: Color("#0a7ea4"),
            secondary_text: Color("#687076"),
            border: Color("#e1e4e8"),
            background: Color("#ffffff"),
        }
    }

    pub fn dark() -> Self {
        Self {
            tint: Color("#ffffff"),
            secondary_text: Color("#9ba1a6"),
            border: Color("#2f3336"),
            background: Color("#151718"),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
