//! Application state and dependency injection.

use hood_postgres::PgClient;
use hood_service::{CaptchaService, EmailService};

use crate::service::{MailConfig, Result, ServiceConfig};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Debug, Clone)]
pub struct ServiceState {
    // External services:
    postgres: PgClient,
    email: EmailService,
    captcha: CaptchaService,

    // Internal configuration:
    mail: MailConfig,
}

impl ServiceState {
    /// Creates the state from already constructed services.
    pub fn new(
        postgres: PgClient,
        email: EmailService,
        captcha: CaptchaService,
        mail: MailConfig,
    ) -> Self {
        Self {
            postgres,
            email,
            captcha,
            mail,
        }
    }

    /// Initializes application state from configuration.
    ///
    /// Connects to Postgres, applies migrations and creates the HTTP clients
    /// of the external services.
    pub async fn from_config(config: &ServiceConfig) -> Result<Self> {
        let service_state = Self {
            postgres: config.connect_postgres().await?,
            email: config.create_email_service()?,
            captcha: config.create_captcha_service()?,

            mail: config.mail_config()?,
        };

        Ok(service_state)
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

// External services:
impl_di!(postgres: PgClient);
impl_di!(email: EmailService);
impl_di!(captcha: CaptchaService);

// Internal configuration:
impl_di!(mail: MailConfig);
