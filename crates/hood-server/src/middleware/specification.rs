//! OpenAPI specification middleware with Scalar UI integration.
//!
//! The specification is generated from the aide [`ApiRouter`] and served as
//! JSON next to an interactive Scalar reference.
//!
//! [`ApiRouter`]: aide::axum::ApiRouter

use aide::axum::ApiRouter;
use aide::openapi::{Contact, Info, OpenApi, Tag};
use aide::scalar::Scalar;
use axum::routing::{Router, get};
use axum::{Extension, Json};
#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET_OPENAPI;

/// OpenAPI configuration for aide integration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct OpenApiConfig {
    /// Path which exposes the OpenAPI JSON specification.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "OPENAPI_JSON_PATH", default_value = "/api/openapi.json")
    )]
    pub open_api_json: String,

    /// Path which exposes the Scalar API reference UI.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "OPENAPI_SCALAR_PATH", default_value = "/api/scalar")
    )]
    pub scalar_ui: String,
}

impl Default for OpenApiConfig {
    fn default() -> Self {
        Self {
            open_api_json: "/api/openapi.json".to_owned(),
            scalar_ui: "/api/scalar".to_owned(),
        }
    }
}

/// Extension trait for [`ApiRouter`] to add OpenAPI documentation with Scalar UI.
///
/// [`ApiRouter`]: aide::axum::ApiRouter
pub trait RouterOpenApiExt<S> {
    /// Adds OpenAPI documentation routes with the default API info.
    fn with_open_api(self, config: &OpenApiConfig) -> Router<S>;

    /// Adds OpenAPI documentation routes with custom OpenAPI info.
    fn with_open_api_info(self, config: &OpenApiConfig, info: Info) -> Router<S>;
}

impl<S> RouterOpenApiExt<S> for ApiRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_open_api(self, config: &OpenApiConfig) -> Router<S> {
        let info = Info {
            title: "Hood Bin Adel API".to_owned(),
            summary: Some("Content and forms of the Hood Bin Adel law firm website".to_owned()),
            description: Some(
                "Serves the bilingual (Arabic and English) pages of the website: \
                home, team, services, careers, blog and legal documents. Accepts \
                consultation requests and job applications and forwards them to \
                the office by email."
                    .to_owned(),
            ),
            contact: Some(Contact {
                name: Some("Hood Bin Adel Law Firm".to_owned()),
                url: Some("https://hoodbinadel.com".to_owned()),
                ..Contact::default()
            }),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            ..Info::default()
        };

        self.with_open_api_info(config, info)
    }

    fn with_open_api_info(self, config: &OpenApiConfig, info: Info) -> Router<S> {
        async fn serve_openapi(Extension(api): Extension<OpenApi>) -> Json<OpenApi> {
            Json(api)
        }

        let mut api = OpenApi {
            info,
            tags: ["Pages", "Blog", "Careers", "Forms", "Health"]
                .into_iter()
                .map(|name| Tag {
                    name: name.to_owned(),
                    ..Tag::default()
                })
                .collect(),
            ..OpenApi::default()
        };

        let scalar = Scalar::new(&config.open_api_json);
        let router = self
            .route(&config.scalar_ui, scalar.axum_route())
            .route(&config.open_api_json, get(serve_openapi));

        let router = router.finish_api(&mut api);

        tracing::debug!(
            target: TRACING_TARGET_OPENAPI,
            json_path = %config.open_api_json,
            scalar_path = %config.scalar_ui,
            paths = api.paths.as_ref().map_or(0, |paths| paths.paths.len()),
            "OpenAPI specification generated"
        );

        router.layer(Extension(api))
    }
}
