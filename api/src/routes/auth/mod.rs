//! Authentication route handlers
//!
//! - Username/password login and logout
//! - Registration with email OTP activation
//! - OTP resend

pub mod login;
pub mod logout;
pub mod register;
pub mod resend;
pub mod verify;

pub use login::login;
pub use logout::logout;
pub use register::register;
pub use resend::resend_otp;
pub use verify::verify_email_and_activate;
