//! Request cookie extractor.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use derive_more::{Deref, DerefMut};

/// Extractor for the request cookies.
///
/// Wraps [`CookieJar`] so that handlers taking it still produce OpenAPI
/// operations. Never rejects: a request without a `Cookie` header yields an
/// empty jar.
#[derive(Debug, Clone, Default, Deref, DerefMut)]
pub struct Cookies(pub CookieJar);

impl Cookies {
    #[inline]
    pub fn into_inner(self) -> CookieJar {
        self.0
    }
}

impl<S> FromRequestParts<S> for Cookies
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(CookieJar::from_headers(&parts.headers)))
    }
}

impl aide::OperationInput for Cookies {}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::http::{HeaderValue, header};
    use axum::routing::get;
    use axum_test::TestServer;

    use super::*;

    async fn echo(Cookies(jar): Cookies) -> String {
        jar.get("viewed_articles")
            .map(|cookie| cookie.value().to_owned())
            .unwrap_or_else(|| "none".to_owned())
    }

    #[tokio::test]
    async fn reads_request_cookies() -> anyhow::Result<()> {
        let server = TestServer::new(Router::new().route("/", get(echo)))?;

        server.get("/").await.assert_text("none");
        server
            .get("/")
            .add_header(header::COOKIE, HeaderValue::from_static("viewed_articles=WyJhIl0="))
            .await
            .assert_text("WyJhIl0=");
        Ok(())
    }
}
