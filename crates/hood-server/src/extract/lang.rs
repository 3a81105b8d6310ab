//! Language segment extractor.

use std::str::FromStr;

use axum::extract::{FromRequestParts, Path as AxumPath, RawPathParams};
use axum::http::request::Parts;
use derive_more::Deref;
use hood_postgres::types::Locale;

use crate::handler::request::LangPathParams;
use crate::handler::{Error, ErrorKind};

/// Name of the path parameter holding the language code.
const LANG_PARAM: &str = "lang";

/// Extractor for the `{lang}` path segment.
///
/// Any value other than `ar` or `en` responds 404, the same as an unknown
/// route. Place it before [`PgPool`] so unknown languages never check out a
/// connection.
///
/// [`PgPool`]: crate::extract::PgPool
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deref)]
pub struct Lang(pub Locale);

impl Lang {
    #[inline]
    pub fn into_inner(self) -> Locale {
        self.0
    }
}

impl<S> FromRequestParts<S> for Lang
where
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = RawPathParams::from_request_parts(parts, state)
            .await
            .map_err(|_| ErrorKind::MissingPathParam.with_resource(LANG_PARAM))?;

        let value = params
            .iter()
            .find_map(|(key, value)| (key == LANG_PARAM).then_some(value))
            .ok_or_else(|| ErrorKind::MissingPathParam.with_resource(LANG_PARAM))?;

        Locale::from_str(value).map(Lang).map_err(|_| {
            ErrorKind::NotFound
                .with_message("Unsupported language")
                .with_resource(LANG_PARAM)
        })
    }
}

impl aide::OperationInput for Lang {
    fn operation_input(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) {
        AxumPath::<LangPathParams>::operation_input(ctx, operation);
    }
}
