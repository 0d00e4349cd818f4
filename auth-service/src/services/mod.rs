pub mod accounts;
pub mod database;
pub mod memory;
pub mod metrics;
pub mod store;

pub use accounts::AccountService;
pub use database::MongoDb;
pub use memory::InMemoryAccountStore;
pub use store::AccountStore;
