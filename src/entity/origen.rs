use std::fmt;

/// How the payer initiated the payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origen {
    Qr,
    Numero,
    Other(String),
}

pub const UNKNOWN_ORIGEN_ICON: &str = "help-circle";

impl Origen {
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "qr" => Self::Qr,
            "número" | "numero" => Self::Numero,
            other => Self::Other(other.to_string()),
        }
    }

    // Feather icon name used next to the amount
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Qr => "qr-code",
            Self::Numero => "hash",
            Self::Other(_) => UNKNOWN_ORIGEN_ICON,
        }
    }
}

pub fn origen_icon(origen: Option<&str>) -> &'static str {
    origen
        .map(|tag| Origen::parse(tag).icon())
        .unwrap_or(UNKNOWN_ORIGEN_ICON)
}

impl fmt::Display for Origen {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Qr => write!(f, "qr"),
            Self::Numero => write!(f, "número"),
            Self::Other(tag) => write!(f, "{}", tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icons() {
        assert_eq!(origen_icon(Some("QR")), "qr-code");
        assert_eq!(origen_icon(Some("Número")), "hash");
        assert_eq!(origen_icon(Some("numero")), "hash");
        assert_eq!(origen_icon(Some("transferencia")), "help-circle");
        assert_eq!(origen_icon(None), "help-circle");
        assert_eq!(origen_icon(Some(" qr ")), "help-circle");
    }
}
