// File: crates/netcafe_gcal/src/auth.rs
use google_calendar3::{
    hyper_rustls::{self, HttpsConnectorBuilder},
    hyper_util::client::legacy::connect::HttpConnector,
    hyper_util::client::legacy::Client,
    yup_oauth2::{
        read_application_secret, read_service_account_key, InstalledFlowAuthenticator,
        InstalledFlowReturnMethod, ServiceAccountAuthenticator,
    },
    CalendarHub,
};
use netcafe_config::{GcalAuthMode, GcalConfig};
use std::{error::Error, path::Path};
use tracing::info;

type Connector = hyper_rustls::HttpsConnector<HttpConnector>;

pub type HubType = CalendarHub<Connector>;

/// Read/write access to events.
pub const CALENDAR_SCOPE: &str = "https://www.googleapis.com/auth/calendar";

/// Builds an authenticated Calendar client.
///
/// For [`GcalAuthMode::Installed`] a token is fetched right away, so the
/// one-time consent prompt happens at startup and not on the first booking.
/// The token is cached at `token_cache_path` and reused on later starts.
pub async fn create_calendar_hub(
    config: &GcalConfig,
) -> Result<HubType, Box<dyn Error + Send + Sync>> {
    let key_path = config
        .key_path
        .as_deref()
        .ok_or("Missing key_path in GcalConfig")?;

    let https = HttpsConnectorBuilder::new()
        .with_native_roots()?
        .https_or_http()
        .enable_http1()
        .build();
    let client = Client::builder(hyper_util::rt::TokioExecutor::new()).build(https);

    let hub = match config.auth {
        GcalAuthMode::ServiceAccount => {
            let sa_key = read_service_account_key(Path::new(key_path)).await?;
            let auth = ServiceAccountAuthenticator::builder(sa_key).build().await?;
            CalendarHub::new(client, auth)
        }
        GcalAuthMode::Installed => {
            let secret = read_application_secret(Path::new(key_path)).await?;
            let auth = InstalledFlowAuthenticator::builder(
                secret,
                InstalledFlowReturnMethod::HTTPRedirect,
            )
            .persist_tokens_to_disk(config.token_cache_path())
            .build()
            .await?;
            auth.token(&[CALENDAR_SCOPE]).await?;
            info!("OAuth token ready (cached at {})", config.token_cache_path());
            CalendarHub::new(client, auth)
        }
    };

    Ok(hub)
}
