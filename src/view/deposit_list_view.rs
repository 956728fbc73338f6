use anyhow::Result;
use async_trait::async_trait;

use crate::entity::Color;
use crate::view::deposit_card::DepositCard;
use crate::view::{write_block, Output};

/// Filter chip for one provider, plus the "Todos" chip when `dominio` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainChip {
    pub dominio: Option<String>,
    pub color: Color,
    pub selected: bool,
}

/// Snapshot of the list screen handed to the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositListScreen {
    pub total: String,
    pub currency: String,
    pub chips: Vec<DomainChip>,
    pub search_query: String,
    pub cards: Vec<DepositCard>,
    pub refreshing: bool,
    pub stale_error: Option<String>,
}

#[async_trait]
pub trait DepositListView: Send + Sync {
    async fn display_loading(&self) -> Result<()>;
    async fn display_deposits(&self, screen: DepositListScreen) -> Result<()>;
}

pub struct ConsoleDepositListView {
    output: Output,
}

impl ConsoleDepositListView {
    pub fn new(output: Output) -> Self {
        Self { output }
    }
}

fn render_chips(chips: &[DomainChip]) -> String {
    chips
        .iter()
        .map(|chip| {
            let label = chip.dominio.as_deref().unwrap_or("Todos");
            if chip.selected {
                format!("[{}]", label)
            } else {
                label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn render_card(card: &DepositCard) -> String {
    let tags = card
        .tags
        .iter()
        .map(|tag| format!("#{}", tag.label))
        .collect::<Vec<_>>()
        .join(" ");

    let mut text = format!(
        "  #{:<5} {:<16} {}  ({})\n         {}\n",
        card.id, card.monto, card.fecha, card.icon, card.nombre
    );
    if !card.mensaje.is_empty() {
        text.push_str(&format!("         {}\n", card.mensaje));
    }
    if !tags.is_empty() {
        text.push_str(&format!("         {}\n", tags));
    }
    text
}

/// Plain-text rendering of the list screen.
pub fn render_list_screen(screen: &DepositListScreen) -> String {
    let mut text = String::from("\nDepósitos\n");
    text.push_str(&format!("Total: {} {}\n", screen.total, screen.currency));
    if screen.refreshing {
        text.push_str("Actualizando...\n");
    }
    if let Some(error) = &screen.stale_error {
        text.push_str(&format!("No se pudo actualizar: {}\n", error));
    }
    if !screen.search_query.is_empty() {
        text.push_str(&format!("Buscar: \"{}\"\n", screen.search_query));
    }
    text.push_str(&format!("Filtros: {}\n\n", render_chips(&screen.chips)));

    if screen.cards.is_empty() {
        text.push_str("  No hay depósitos\n");
    }
    for card in &screen.cards {
        text.push_str(&render_card(card));
    }
    text
}

#[async_trait]
impl DepositListView for ConsoleDepositListView {
    async fn display_loading(&self) -> Result<()> {
        write_block(&self.output, "Cargando depósitos...\n")
    }

    async fn display_deposits(&self, screen: DepositListScreen) -> Result<()> {
        write_block(&self.output, &render_list_screen(&screen))
    }
}
