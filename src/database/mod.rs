pub mod manager;
pub mod models;
pub mod repository;
pub mod transaction;

pub use manager::{DatabaseError, DatabaseManager};
pub use repository::{CategoryRepository, SqlCategoryRepository};
pub use transaction::{in_transaction, Tx};
