use anyhow::Result;
use async_trait::async_trait;

use crate::view::deposit_card::DepositDetail;
use crate::view::{write_block, Output};

#[async_trait]
pub trait DepositDetailView: Send + Sync {
    async fn display_loading(&self) -> Result<()>;
    async fn display_deposit(&self, detail: DepositDetail) -> Result<()>;
    async fn display_not_found(&self, id: i64) -> Result<()>;
}

pub struct ConsoleDepositDetailView {
    output: Output,
}

impl ConsoleDepositDetailView {
    pub fn new(output: Output) -> Self {
        Self { output }
    }
}

pub fn render_detail(detail: &DepositDetail) -> String {
    let mut text = String::from("\nDetalle del Depósito\n\n");
    text.push_str(&format!("  Monto Recibido: {}\n", detail.monto));
    text.push_str(&format!("  {}\n\n", detail.fecha));

    text.push_str("  Información del Remitente\n");
    text.push_str(&format!("    Nombre:  {}\n", detail.nombre));
    text.push_str(&format!("    Mensaje: {}\n\n", detail.mensaje));

    text.push_str("  Detalles de la Transacción\n");
    if let Some(dominio) = &detail.dominio {
        text.push_str(&format!("    Dominio: {}\n", dominio.label));
    }
    if let Some(origen) = &detail.origen {
        text.push_str(&format!("    Origen:  {}\n", origen.label));
    }
    text.push_str(&format!("    Canal:   {}\n", detail.canal));
    text.push_str(&format!("    Hash:    {}\n", detail.hash));
    text
}

#[async_trait]
impl DepositDetailView for ConsoleDepositDetailView {
    async fn display_loading(&self) -> Result<()> {
        write_block(&self.output, "Cargando depósito...\n")
    }

    async fn display_deposit(&self, detail: DepositDetail) -> Result<()> {
        write_block(&self.output, &render_detail(&detail))
    }

    async fn display_not_found(&self, id: i64) -> Result<()> {
        write_block(
            &self.output,
            &format!("No se encontró el depósito {}\n", id),
        )
    }
}
