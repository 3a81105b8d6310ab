//! Connection setup for the content store pool.

use std::time::Instant;

use diesel::ConnectionResult;
use diesel_async::AsyncConnection;
use futures::FutureExt;
use futures::future::BoxFuture;

use crate::TRACING_TARGET_CONNECTION;

/// Replaces the password of a connection URL with `***`.
pub(crate) fn mask_url(url: &str) -> String {
    if let Some(at_pos) = url.find('@')
        && let Some(colon_pos) = url[..at_pos].rfind(':')
        && !url[colon_pos + 1..at_pos].starts_with("//")
    {
        let mut masked = url.to_string();
        masked.replace_range(colon_pos + 1..at_pos, "***");
        return masked;
    }
    url.to_string()
}

/// Opens a connection for the pool and logs how long the handshake took.
///
/// Installed as the [`ManagerConfig::custom_setup`] callback.
///
/// [`ManagerConfig::custom_setup`]: diesel_async::pooled_connection::ManagerConfig
pub(crate) fn establish<C>(addr: &str) -> BoxFuture<'_, ConnectionResult<C>>
where
    C: AsyncConnection + 'static,
{
    let start = Instant::now();

    async move {
        let result = C::establish(addr).await;
        let elapsed_ms = start.elapsed().as_millis();

        match &result {
            Ok(_) => tracing::debug!(
                target: TRACING_TARGET_CONNECTION,
                elapsed_ms,
                "Content store connection opened"
            ),
            Err(err) => tracing::error!(
                target: TRACING_TARGET_CONNECTION,
                addr = %mask_url(addr),
                elapsed_ms,
                error = %err,
                "Cannot reach the content store"
            ),
        }

        result
    }
    .boxed()
}
