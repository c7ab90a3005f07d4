pub mod db;
pub mod handlers;
pub mod models;
pub mod schema;

pub use db::{build_pool, run_migrations, Config, DbPool};
pub use handlers::PurchaseHandler;
