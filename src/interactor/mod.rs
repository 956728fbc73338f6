pub mod deposit_interactor;

pub use deposit_interactor::{DepositInteractor, DepositInteractorImpl};
