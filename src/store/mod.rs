pub mod deposit_repository;
pub mod models;
pub mod pg_repository;
pub mod rest_repository;

pub use deposit_repository::DepositRepository;
pub use pg_repository::PgDepositRepository;
pub use rest_repository::RestDepositRepository;
