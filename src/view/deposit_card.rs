use crate::entity::{dominio_color, origen_icon, Color, Deposito, Theme};
use crate::utils::{format_date, format_date_long, truncate_middle};

const MENSAJE_PREVIEW_CHARS: usize = 80;
const HASH_PREVIEW_CHARS: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub label: String,
    pub color: Color,
}

/// One row of the deposit list, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositCard {
    pub id: i64,
    pub monto: String,
    pub fecha: String,
    pub icon: &'static str,
    pub accent: Color,
    pub nombre: String,
    pub mensaje: String,
    pub tags: Vec<Tag>,
}

impl DepositCard {
    pub fn new(deposito: &Deposito, theme: &Theme) -> Self {
        let accent = dominio_color(deposito.dominio.as_deref(), theme.secondary_text);

        Self {
            id: deposito.id,
            monto: deposito.format_monto(),
            fecha: format_date(&deposito.creado_en),
            icon: origen_icon(deposito.origen.as_deref()),
            accent,
            nombre: deposito.nombre.clone(),
            mensaje: preview(&deposito.mensaje, MENSAJE_PREVIEW_CHARS),
            tags: tags(deposito, accent),
        }
    }
}

/// Everything the detail screen shows for a single deposit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositDetail {
    pub id: i64,
    pub monto: String,
    pub fecha: String,
    pub nombre: String,
    pub mensaje: String,
    pub dominio: Option<Tag>,
    pub origen: Option<Tag>,
    pub canal: String,
    pub hash: String,
}

impl DepositDetail {
    pub fn new(deposito: &Deposito, theme: &Theme) -> Self {
        let accent = dominio_color(deposito.dominio.as_deref(), theme.secondary_text);
        let tag = |label: &str| Tag {
            label: label.to_string(),
            color: accent,
        };

        Self {
            id: deposito.id,
            monto: deposito.format_monto(),
            fecha: format_date_long(&deposito.creado_en),
            nombre: deposito.nombre.clone(),
            mensaje: deposito.mensaje.clone(),
            dominio: deposito.dominio.as_deref().map(tag),
            origen: deposito.origen.as_deref().map(tag),
            canal: deposito.canal.clone(),
            hash: truncate_middle(&deposito.hash, HASH_PREVIEW_CHARS),
        }
    }
}

// Origen tags share the dominio accent
fn tags(deposito: &Deposito, accent: Color) -> Vec<Tag> {
    [deposito.dominio.as_deref(), deposito.origen.as_deref()]
        .into_iter()
        .flatten()
        .map(|label| Tag {
            label: label.to_string(),
            color: accent,
        })
        .collect()
}

fn preview(text: &str, max_chars: usize) -> String {
    let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() <= max_chars {
        single_line
    } else {
        let cut: String = single_line.chars().take(max_chars - 1).collect();
        format!("{}…", cut.trim_end())
    }
}
