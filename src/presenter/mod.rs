pub mod deposit_detail_presenter;
pub mod deposit_filter;
pub mod deposit_list_presenter;
pub mod notification_presenter;

pub use deposit_detail_presenter::{DepositDetailPresenter, DepositDetailPresenterImpl, DetailOutcome};
pub use deposit_filter::{available_domains, total_amount, DepositFilter};
pub use deposit_list_presenter::{DepositListPresenter, DepositListPresenterImpl, RefreshOutcome};
pub use notification_presenter::{NotificationPresenter, NotificationPresenterImpl};
