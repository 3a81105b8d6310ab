//! Practice area handlers.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use hood_postgres::query::ServiceRepository;

use crate::extract::{Json, Lang, Path, PgPool};
use crate::handler::request::SlugPathParams;
use crate::handler::response::{ErrorResponse, Service, ServicesPage};
use crate::handler::{OrNotFound, Result};
use crate::service::ServiceState;

/// Tracing target for practice area operations.
const TRACING_TARGET: &str = "hood_server::handler::services";

/// Lists the practice areas of a language.
#[tracing::instrument(skip_all, fields(lang = %locale))]
async fn list_services(
    Lang(locale): Lang,
    PgPool(mut conn): PgPool,
) -> Result<Json<ServicesPage>> {
    let services = conn.list_services(locale).await?;

    tracing::debug!(
        target: TRACING_TARGET,
        service_count = services.len(),
        "Services listed"
    );

    Ok(Json(ServicesPage {
        services: services.into_iter().map(Service::from_model).collect(),
    }))
}

fn list_services_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List services")
        .description("Returns every practice area of the firm.")
        .response::<200, Json<ServicesPage>>()
        .response::<404, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Returns one practice area by slug.
#[tracing::instrument(skip_all, fields(lang = %locale, slug = %path_params.slug))]
async fn read_service(
    Lang(locale): Lang,
    PgPool(mut conn): PgPool,
    Path(path_params): Path<SlugPathParams>,
) -> Result<Json<Service>> {
    let service = conn
        .find_service_by_slug(locale, &path_params.slug)
        .await?
        .or_not_found("Service", &path_params.slug)?;

    Ok(Json(Service::from_model(service)))
}

fn read_service_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get service")
        .description("Returns one practice area by its slug.")
        .response::<200, Json<Service>>()
        .response::<404, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Returns routes for practice areas.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/api/{lang}/services",
            get_with(list_services, list_services_docs),
        )
        .api_route(
            "/api/{lang}/services/{slug}",
            get_with(read_service, read_service_docs),
        )
        .with_path_items(|item| item.tag("Pages"))
}
