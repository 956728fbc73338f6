use crate::entity::{dominio_color, Deposito, Theme};
use crate::interactor::DepositInteractor;
use crate::presenter::deposit_filter::{available_domains, common_currency, total_amount, DepositFilter};
use crate::utils::format_amount;
use crate::view::deposit_card::DepositCard;
use crate::view::deposit_list_view::{DepositListScreen, DepositListView, DomainChip};
use anyhow::Result;
use async_trait::async_trait;
use log::{debug, error, info};
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// What a fetch request ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The list was replaced with this many records
    Updated(usize),
    /// The fetch failed; the previous list is still shown
    Failed,
    /// Another fetch was already in flight, nothing was issued
    Coalesced,
}

#[async_trait]
pub trait DepositListPresenter: Send + Sync {
    /// First load of the screen, shows the loading indicator.
    async fn mount(&self) -> Result<RefreshOutcome>;
    /// Manual pull-to-refresh, shows the refresh indicator.
    async fn refresh(&self) -> Result<RefreshOutcome>;
    async fn set_domain_filter(&self, domain: Option<&str>) -> Result<()>;
    async fn toggle_domain_filter(&self, domain: &str) -> Result<()>;
    async fn set_search_query(&self, query: &str) -> Result<()>;
    async fn show_deposits(&self) -> Result<()>;

    fn visible_deposits(&self) -> Vec<Deposito>;
    fn available_domains(&self) -> Vec<String>;
    fn total_amount(&self) -> Decimal;
    fn formatted_total(&self) -> String;
    fn is_loading(&self) -> bool;
    fn is_refreshing(&self) -> bool;
}

#[derive(Debug, Default)]
struct ListState {
    deposits: Vec<Deposito>,
    filter: DepositFilter,
    loading: bool,
    refreshing: bool,
    last_error: Option<String>,
}

#[derive(Clone, Copy)]
enum FetchKind {
    Initial,
    Manual,
}

// Clears the in-flight flag however the fetch ends
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        if flag.swap(true, Ordering::AcqRel) {
            None
        } else {
            Some(Self(flag))
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct DepositListPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
    theme: Theme,
    currency_label: String,
    state: Mutex<ListState>,
    fetch_in_flight: AtomicBool,
}

impl<I, V> DepositListPresenterImpl<I, V>
where
    I: DepositInteractor,
    V: DepositListView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>, theme: Theme, currency_label: &str) -> Self {
        Self {
            interactor,
            view,
            theme,
            currency_label: currency_label.to_string(),
            state: Mutex::new(ListState::default()),
            fetch_in_flight: AtomicBool::new(false),
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, ListState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn fetch(&self, kind: FetchKind) -> Result<RefreshOutcome> {
        let Some(_in_flight) = InFlight::acquire(&self.fetch_in_flight) else {
            debug!("Fetch already in flight, coalescing");
            return Ok(RefreshOutcome::Coalesced);
        };

        {
            let mut state = self.lock_state();
            match kind {
                FetchKind::Initial => state.loading = true,
                FetchKind::Manual => state.refreshing = true,
            }
        }
        let shown = match kind {
            FetchKind::Initial => self.view.display_loading().await,
            FetchKind::Manual => self.show_deposits().await,
        };
        if let Err(e) = shown {
            let mut state = self.lock_state();
            state.loading = false;
            state.refreshing = false;
            return Err(e);
        }

        let result = self.interactor.list_deposits().await;

        let outcome = {
            let mut state = self.lock_state();
            state.loading = false;
            state.refreshing = false;

            match result {
                Ok(deposits) => {
                    let count = deposits.len();
                    state.deposits = deposits;
                    state.last_error = None;
                    RefreshOutcome::Updated(count)
                }
                Err(e) => {
                    error!(
                        "Error fetching depositos, keeping {} cached records: {}",
                        state.deposits.len(),
                        e
                    );
                    state.last_error = Some(e.to_string());
                    RefreshOutcome::Failed
                }
            }
        };

        self.show_deposits().await?;
        Ok(outcome)
    }

    fn build_screen(&self) -> DepositListScreen {
        let state = self.lock_state();
        let visible: Vec<&Deposito> = state.filter.apply(&state.deposits).collect();
        let selected = state.filter.domain();

        let mut chips = vec![DomainChip {
            dominio: None,
            color: self.theme.tint,
            selected: selected.is_none(),
        }];
        chips.extend(available_domains(&state.deposits).map(|dominio| DomainChip {
            dominio: Some(dominio.to_string()),
            color: dominio_color(Some(dominio), self.theme.tint),
            selected: selected == Some(dominio),
        }));

        let currency = common_currency(visible.iter().copied())
            .unwrap_or(&self.currency_label)
            .to_string();

        debug!(
            "Recomputed list view: {} of {} deposits visible",
            visible.len(),
            state.deposits.len()
        );

        DepositListScreen {
            total: format_amount(total_amount(visible.iter().copied())),
            currency,
            chips,
            search_query: state.filter.query().to_string(),
            cards: visible
                .iter()
                .map(|deposito| DepositCard::new(deposito, &self.theme))
                .collect(),
            refreshing: state.refreshing,
            stale_error: state.last_error.clone(),
        }
    }
}

#[async_trait]
impl<I, V> DepositListPresenter for DepositListPresenterImpl<I, V>
where
    I: DepositInteractor + Send + Sync,
    V: DepositListView + Send + Sync,
{
    async fn mount(&self) -> Result<RefreshOutcome> {
        info!("Loading deposit list");
        self.fetch(FetchKind::Initial).await
    }

    async fn refresh(&self) -> Result<RefreshOutcome> {
        info!("Refreshing deposit list");
        self.fetch(FetchKind::Manual).await
    }

    async fn set_domain_filter(&self, domain: Option<&str>) -> Result<()> {
        self.lock_state().filter.set_domain(domain);
        self.show_deposits().await
    }

    async fn toggle_domain_filter(&self, domain: &str) -> Result<()> {
        self.lock_state().filter.toggle_domain(domain);
        self.show_deposits().await
    }

    async fn set_search_query(&self, query: &str) -> Result<()> {
        self.lock_state().filter.set_query(query);
        self.show_deposits().await
    }

    async fn show_deposits(&self) -> Result<()> {
        if self.is_loading() {
            return self.view.display_loading().await;
        }

        let screen = self.build_screen();
        self.view.display_deposits(screen).await
    }

    fn visible_deposits(&self) -> Vec<Deposito> {
        let state = self.lock_state();
        state.filter.apply(&state.deposits).cloned().collect()
    }

    fn available_domains(&self) -> Vec<String> {
        let state = self.lock_state();
        available_domains(&state.deposits).map(str::to_string).collect()
    }

    fn total_amount(&self) -> Decimal {
        let state = self.lock_state();
        total_amount(state.filter.apply(&state.deposits))
    }

    fn formatted_total(&self) -> String {
        format_amount(self.total_amount())
    }

    fn is_loading(&self) -> bool {
        self.lock_state().loading
    }

    fn is_refreshing(&self) -> bool {
        self.lock_state().refreshing
    }
}
