use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

pub mod deposit_card;
pub mod deposit_detail_view;
pub mod deposit_list_view;
pub mod notification_view;

/// Shared text sink the console views write to.
pub type Output = Arc<Mutex<dyn Write + Send>>;

pub fn stdout_output() -> Output {
    Arc::new(Mutex::new(std::io::stdout()))
}

pub(crate) fn write_block(output: &Output, text: &str) -> anyhow::Result<()> {
    let mut out = output.lock().unwrap_or_else(PoisonError::into_inner);
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
