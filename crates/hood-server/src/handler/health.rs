//! Liveness probe.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;

use crate::extract::Json;
use crate::handler::response::Health;
use crate::service::ServiceState;

/// Reports that the process is up. Does not touch the database.
async fn health() -> Json<Health> {
    Json(Health::ok())
}

fn health_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Liveness probe")
        .description("Returns `{\"status\":\"ok\"}` while the process is serving requests.")
        .response::<200, Json<Health>>()
}

/// Returns the health check route.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/health", get_with(health, health_docs))
        .with_path_items(|item| item.tag("Health"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn health_is_ok() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        let response = server.get("/health").await;
        response.assert_status_ok();
        response.assert_json(&serde_json::json!({"status": "ok"}));
        Ok(())
    }
}
