//! Page components for votecheck.

mod awaiting_confirmation;
mod login;
mod not_registered;
mod registration_check;
mod registration_verified;

pub use awaiting_confirmation::AwaitingConfirmation;
pub use login::Login;
pub use not_registered::NotRegistered;
pub use registration_check::RegistrationCheck;
pub use registration_verified::RegistrationVerified;
