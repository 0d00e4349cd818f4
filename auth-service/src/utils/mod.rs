pub mod password;

pub use password::passwords_match;
