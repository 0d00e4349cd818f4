pub mod doctor;
pub mod prescription;
pub mod query;

pub use doctor::Doctor;
pub use prescription::Prescription;
pub use query::Query;
