mod common;

use common::{deposito, Gate, ListEvent, RecordingListView, ScriptedRepository};
use depositos::interactor::DepositInteractorImpl;
use depositos::presenter::{DepositListPresenter, DepositListPresenterImpl, RefreshOutcome};
use depositos::{DepositError, Theme, YAPE_PURPLE};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;
use tokio::sync::Notify;

type Presenter = DepositListPresenterImpl<DepositInteractorImpl, RecordingListView>;

fn presenter(repository: Arc<ScriptedRepository>) -> (Presenter, Arc<RecordingListView>) {
    let view = Arc::new(RecordingListView::default());
    let interactor = Arc::new(DepositInteractorImpl::new(repository));
    (
        DepositListPresenterImpl::new(interactor, view.clone(), Theme::light(), "BOB"),
        view,
    )
}

fn three_deposits() -> Vec<depositos::Deposito> {
    vec![
        deposito(3, "Lucía", Some("yape"), dec!(7.75)),
        deposito(2, "María", Some("bcp"), dec!(20.25)),
        deposito(1, "Juan", Some("yape"), dec!(10.5)),
    ]
}

#[tokio::test]
async fn test_mount_shows_loading_then_list() {
    let repository = Arc::new(ScriptedRepository::new());
    repository.push_list(Ok(three_deposits()));
    let (presenter, view) = presenter(repository.clone());

    let outcome = presenter.mount().await.unwrap();

    assert_eq!(outcome, RefreshOutcome::Updated(3));
    assert!(!presenter.is_loading());
    assert_eq!(view.events.lock().unwrap()[0], ListEvent::Loading);

    let screen = view.last_screen().unwrap();
    assert_eq!(screen.cards.len(), 3);
    assert_eq!(screen.total, "38.50");
    assert_eq!(screen.currency, "BOB");
    assert!(screen.stale_error.is_none());

    let chips: Vec<Option<String>> = screen.chips.iter().map(|c| c.dominio.clone()).collect();
    assert_eq!(chips, vec![None, Some("yape".to_string()), Some("bcp".to_string())]);
    assert!(screen.chips[0].selected);
    assert_eq!(screen.chips[1].color, YAPE_PURPLE);
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_list() {
    let repository = Arc::new(ScriptedRepository::new());
    repository.push_list(Ok(three_deposits()));
    repository.push_list(Err(DepositError::fetch("network unreachable")));
    let (presenter, view) = presenter(repository.clone());

    presenter.mount().await.unwrap();
    let outcome = presenter.refresh().await.unwrap();

    assert_eq!(outcome, RefreshOutcome::Failed);
    assert_eq!(presenter.visible_deposits().len(), 3);
    assert!(!presenter.is_loading());
    assert!(!presenter.is_refreshing());
    // Only the first load shows the loading indicator
    assert_eq!(view.count_loading(), 1);

    let screen = view.last_screen().unwrap();
    assert_eq!(screen.cards.len(), 3);
    assert!(!screen.refreshing);
    assert!(screen
        .stale_error
        .unwrap()
        .contains("network unreachable"));
}

#[tokio::test]
async fn test_failed_first_load_shows_empty_list() {
    let repository = Arc::new(ScriptedRepository::new());
    repository.push_list(Err(DepositError::fetch("timeout")));
    let (presenter, view) = presenter(repository.clone());

    assert_eq!(presenter.mount().await.unwrap(), RefreshOutcome::Failed);

    let screen = view.last_screen().unwrap();
    assert!(screen.cards.is_empty());
    assert_eq!(screen.total, "0.00");
    assert!(!presenter.is_loading());
}

#[tokio::test]
async fn test_refresh_shows_refresh_indicator() {
    let repository = Arc::new(ScriptedRepository::new());
    repository.push_list(Ok(three_deposits()));
    repository.push_list(Ok(vec![deposito(4, "Ana", None, dec!(1))]));
    let (presenter, view) = presenter(repository.clone());

    presenter.mount().await.unwrap();
    presenter.refresh().await.unwrap();

    let events = view.events.lock().unwrap().clone();
    let refreshing_screens = events
        .iter()
        .filter(|event| matches!(event, ListEvent::Screen(screen) if screen.refreshing))
        .count();
    assert_eq!(refreshing_screens, 1);
    assert_eq!(presenter.visible_deposits().len(), 1);
    assert_eq!(presenter.available_domains(), Vec::<String>::new());
}

#[tokio::test]
async fn test_overlapping_refresh_is_coalesced() {
    let started = Arc::new(Notify::new());
    let release = Arc::new(Notify::new());
    let repository = Arc::new(ScriptedRepository::with_gate(Gate {
        started: started.clone(),
        release: release.clone(),
    }));
    repository.push_list(Ok(three_deposits()));
    let (presenter, _view) = presenter(repository.clone());

    let (first, second) = tokio::join!(presenter.refresh(), async {
        started.notified().await;
        let second = presenter.refresh().await;
        release.notify_one();
        second
    });

    assert_eq!(first.unwrap(), RefreshOutcome::Updated(3));
    assert_eq!(second.unwrap(), RefreshOutcome::Coalesced);
    assert_eq!(repository.list_calls(), 1);
}

#[tokio::test]
async fn test_filters_compose_and_drive_total() {
    let repository = Arc::new(ScriptedRepository::new());
    repository.push_list(Ok(three_deposits()));
    let (presenter, view) = presenter(repository.clone());
    presenter.mount().await.unwrap();

    presenter.set_domain_filter(Some("yape")).await.unwrap();
    assert_eq!(presenter.visible_deposits().len(), 2);
    assert_eq!(presenter.formatted_total(), "18.25");

    presenter.set_search_query("LUC").await.unwrap();
    let visible: Vec<i64> = presenter.visible_deposits().iter().map(|d| d.id).collect();
    assert_eq!(visible, vec![3]);
    assert_eq!(view.last_screen().unwrap().search_query, "LUC");

    presenter.set_search_query("").await.unwrap();
    assert_eq!(presenter.visible_deposits().len(), 2);

    presenter.set_domain_filter(None).await.unwrap();
    assert_eq!(presenter.visible_deposits().len(), 3);
    assert_eq!(presenter.total_amount(), dec!(38.50));
}

#[tokio::test]
async fn test_toggle_domain_and_empty_total() {
    let repository = Arc::new(ScriptedRepository::new());
    repository.push_list(Ok(three_deposits()));
    let (presenter, view) = presenter(repository.clone());
    presenter.mount().await.unwrap();

    presenter.toggle_domain_filter("bcp").await.unwrap();
    let screen = view.last_screen().unwrap();
    assert!(screen.chips.iter().any(|c| c.selected && c.dominio.as_deref() == Some("bcp")));
    assert_eq!(screen.total, "20.25");

    presenter.set_search_query("nobody").await.unwrap();
    assert_eq!(presenter.total_amount(), Decimal::ZERO);
    assert_eq!(presenter.formatted_total(), "0.00");

    presenter.set_search_query("").await.unwrap();
    presenter.toggle_domain_filter("bcp").await.unwrap();
    assert!(view.last_screen().unwrap().chips[0].selected);
}

#[tokio::test]
async fn test_mixed_currencies_use_default_label() {
    let mut deposits = three_deposits();
    deposits[0].moneda = "S/".to_string();
    let repository = Arc::new(ScriptedRepository::new());
    repository.push_list(Ok(deposits));
    let (presenter, view) = presenter(repository.clone());
    presenter.mount().await.unwrap();

    assert_eq!(view.last_screen().unwrap().currency, "BOB");

    presenter.set_search_query("lucía").await.unwrap();
    assert_eq!(view.last_screen().unwrap().currency, "S/");
}

#[tokio::test]
async fn test_failed_loading_render_does_not_stick() {
    let repository = Arc::new(ScriptedRepository::new());
    repository.push_list(Ok(three_deposits()));
    let (presenter, view) = presenter(repository.clone());
    view.fail_next_loading();

    assert!(presenter.mount().await.is_err());
    assert!(!presenter.is_loading());
    assert_eq!(repository.list_calls(), 0);

    presenter.show_deposits().await.unwrap();
    assert!(view.last_screen().is_some());

    assert_eq!(presenter.mount().await.unwrap(), RefreshOutcome::Updated(3));
    assert_eq!(view.last_screen().unwrap().cards.len(), 3);
}
