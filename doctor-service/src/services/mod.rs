pub mod database;
pub mod memory;
pub mod metrics;
pub mod prescriptions;
pub mod store;

pub use database::MongoDb;
pub use memory::InMemoryClinicStore;
pub use prescriptions::PrescriptionService;
pub use store::ClinicStore;
