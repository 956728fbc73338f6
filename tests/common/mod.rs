#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use depositos::store::DepositRepository;
use depositos::view::deposit_card::DepositDetail;
use depositos::view::deposit_detail_view::DepositDetailView;
use depositos::view::deposit_list_view::{DepositListScreen, DepositListView};
use depositos::{DepositError, Deposito};
use rust_decimal::Decimal;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

pub fn deposito(id: i64, nombre: &str, dominio: Option<&str>, monto: Decimal) -> Deposito {
    Deposito {
        id,
        nombre: nombre.to_string(),
        monto,
        moneda: "BOB".to_string(),
        origen: Some("qr".to_string()),
        dominio: dominio.map(str::to_string),
        mensaje: format!("pago de {}", nombre),
        canal: "push".to_string(),
        hash: format!("hash-{}", id),
        creado_en: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
            + chrono::Duration::minutes(id),
    }
}

/// Repository fake that replays scripted list results.
#[derive(Default)]
pub struct ScriptedRepository {
    list_results: Mutex<VecDeque<Result<Vec<Deposito>, DepositError>>>,
    records: Mutex<Vec<Deposito>>,
    list_calls: AtomicUsize,
    gate: Option<Gate>,
}

/// Holds a list call open until released.
pub struct Gate {
    pub started: Arc<Notify>,
    pub release: Arc<Notify>,
}

impl ScriptedRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gate(gate: Gate) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    pub fn push_list(&self, result: Result<Vec<Deposito>, DepositError>) {
        self.list_results.lock().unwrap().push_back(result);
    }

    pub fn set_records(&self, records: Vec<Deposito>) {
        *self.records.lock().unwrap() = records;
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DepositRepository for ScriptedRepository {
    async fn list_deposits(&self) -> Result<Vec<Deposito>, DepositError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            gate.started.notify_one();
            gate.release.notified().await;
        }

        self.list_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn get_deposit(&self, id: i64) -> Result<Deposito, DepositError> {
        if id < 0 {
            return Err(DepositError::fetch("connection reset"));
        }

        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|deposito| deposito.id == id)
            .cloned()
            .ok_or(DepositError::NotFound(id))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    Loading,
    Screen(DepositListScreen),
}

#[derive(Default)]
pub struct RecordingListView {
    pub events: Mutex<Vec<ListEvent>>,
    fail_next_loading: AtomicBool,
}

impl RecordingListView {
    /// Makes the next `display_loading` call fail, as a closed terminal would.
    pub fn fail_next_loading(&self) {
        self.fail_next_loading.store(true, Ordering::SeqCst);
    }

    pub fn last_screen(&self) -> Option<DepositListScreen> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|event| match event {
                ListEvent::Screen(screen) => Some(screen.clone()),
                ListEvent::Loading => None,
            })
    }

    pub fn count_loading(&self) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| matches!(event, ListEvent::Loading))
            .count()
    }
}

#[async_trait]
impl DepositListView for RecordingListView {
    async fn display_loading(&self) -> anyhow::Result<()> {
        if self.fail_next_loading.swap(false, Ordering::SeqCst) {
            anyhow::bail!("output closed");
        }
        self.events.lock().unwrap().push(ListEvent::Loading);
        Ok(())
    }

    async fn display_deposits(&self, screen: DepositListScreen) -> anyhow::Result<()> {
        self.events.lock().unwrap().push(ListEvent::Screen(screen));
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailEvent {
    Loading,
    Deposit(DepositDetail),
    NotFound(i64),
}

#[derive(Default)]
pub struct RecordingDetailView {
    pub events: Mutex<Vec<DetailEvent>>,
}

#[async_trait]
impl DepositDetailView for RecordingDetailView {
    async fn display_loading(&self) -> anyhow::Result<()> {
        self.events.lock().unwrap().push(DetailEvent::Loading);
        Ok(())
    }

    async fn display_deposit(&self, detail: DepositDetail) -> anyhow::Result<()> {
        self.events.lock().unwrap().push(DetailEvent::Deposit(detail));
        Ok(())
    }

    async fn display_not_found(&self, id: i64) -> anyhow::Result<()> {
        self.events.lock().unwrap().push(DetailEvent::NotFound(id));
        Ok(())
    }
}
