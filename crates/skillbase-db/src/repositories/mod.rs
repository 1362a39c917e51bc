//! Repository implementations

pub mod changes_tx;

mod catalog;
mod change_record;
mod error;
mod user;

pub use catalog::PgCatalogRepository;
pub use change_record::PgChangeRecordRepository;
pub use error::map_db_error;
pub use user::PgUserRepository;
