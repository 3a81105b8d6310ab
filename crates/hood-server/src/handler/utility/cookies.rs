//! The `viewed_articles` cookie.
//!
//! The value is a JSON array of article slugs, base64-encoded so that it only
//! contains characters allowed in a cookie value. A missing or unreadable
//! cookie counts as an empty list.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Name of the cookie listing the articles this browser has viewed.
pub const VIEWED_ARTICLES_COOKIE: &str = "viewed_articles";

/// Slugs of the articles already counted for this browser.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ViewedArticles(Vec<String>);

impl ViewedArticles {
    /// Reads the list from the request cookies.
    pub fn from_jar(jar: &CookieJar) -> Self {
        jar.get(VIEWED_ARTICLES_COOKIE)
            .and_then(|cookie| Self::decode(cookie.value()))
            .unwrap_or_default()
    }

    fn decode(value: &str) -> Option<Self> {
        let bytes = STANDARD.decode(value).ok()?;
        serde_json::from_slice(&bytes).ok().map(Self)
    }

    fn encode(&self) -> String {
        let json = serde_json::to_vec(&self.0).unwrap_or_default();
        STANDARD.encode(json)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.0.iter().any(|viewed| viewed == slug)
    }

    pub fn push(&mut self, slug: impl Into<String>) {
        self.0.push(slug.into());
    }

    /// Builds the cookie to send back, valid for one day on every path.
    pub fn into_cookie(self) -> Cookie<'static> {
        Cookie::build((VIEWED_ARTICLES_COOKIE, self.encode()))
            .path("/")
            .same_site(SameSite::Lax)
            .http_only(false)
            .max_age(time::Duration::days(1))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_garbled_cookie_is_empty() {
        assert_eq!(ViewedArticles::from_jar(&CookieJar::new()), ViewedArticles::default());

        let jar = CookieJar::new().add(Cookie::new(VIEWED_ARTICLES_COOKIE, "not base64!"));
        assert_eq!(ViewedArticles::from_jar(&jar), ViewedArticles::default());
    }

    #[test]
    fn cookie_keeps_slugs() {
        let mut viewed = ViewedArticles::default();
        viewed.push("company-formation");
        viewed.push("تأسيس-الشركات");

        let cookie = viewed.clone().into_cookie();
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.max_age(), Some(time::Duration::days(1)));

        let jar = CookieJar::new().add(cookie);
        let restored = ViewedArticles::from_jar(&jar);
        assert_eq!(restored, viewed);
        assert!(restored.contains("company-formation"));
        assert!(!restored.contains("other"));
    }
}
