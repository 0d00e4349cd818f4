pub mod doctor;
pub mod user;

pub use doctor::Doctor;
pub use user::User;

/// Account family selected by the `client` tag of a signup or signin body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientKind {
    Doctor,
    User,
}

impl ClientKind {
    pub const DOCTOR_TAG: &'static str = "doctor";
    pub const USER_TAG: &'static str = "user";

    /// Only the exact tag `"doctor"` selects doctors; anything else,
    /// including a missing tag, is a regular user.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some(Self::DOCTOR_TAG) => ClientKind::Doctor,
            _ => ClientKind::User,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClientKind::Doctor => Self::DOCTOR_TAG,
            ClientKind::User => Self::USER_TAG,
        }
    }
}
