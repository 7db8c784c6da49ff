//! OTP delivery
//!
//! The catalog has no mail transport. `LogOtpNotifier` stands in for one:
//! it records each delivery in the log with the address masked, and only
//! prints the code itself at debug level for local development.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use catalog_core::services::OtpNotifier;
use catalog_shared::utils::email::mask_email;

/// Notifier that writes deliveries to the application log
#[derive(Debug, Default)]
pub struct LogOtpNotifier {
    delivered: AtomicUsize,
}

impl LogOtpNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of codes delivered since creation
    pub fn delivered_count(&self) -> usize {
        self.delivered.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl OtpNotifier for LogOtpNotifier {
    async fn deliver(&self, email: &str, code: &str) -> Result<(), String> {
        let masked = mask_email(email);
        tracing::info!(email = %masked, event = "otp_delivered", "Activation code delivered");
        tracing::debug!(email = %masked, code = %code, "Activation code (development only)");

        self.delivered.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
