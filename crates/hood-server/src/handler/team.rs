//! Team page handler.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use hood_postgres::query::TeamRepository;

use crate::extract::{Json, Lang, PgPool};
use crate::handler::Result;
use crate::handler::response::{ErrorResponse, TeamMember, TeamPage};
use crate::service::ServiceState;

/// Tracing target for team page operations.
const TRACING_TARGET: &str = "hood_server::handler::team";

/// Lists the team members of a language.
#[tracing::instrument(skip_all, fields(lang = %locale))]
async fn team_page(Lang(locale): Lang, PgPool(mut conn): PgPool) -> Result<Json<TeamPage>> {
    let members = conn.list_team_members(locale).await?;

    tracing::debug!(
        target: TRACING_TARGET,
        member_count = members.len(),
        "Team members listed"
    );

    Ok(Json(TeamPage {
        members: members.into_iter().map(TeamMember::from_model).collect(),
    }))
}

fn team_page_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get team page")
        .description("Returns the members of the firm in display order.")
        .response::<200, Json<TeamPage>>()
        .response::<404, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Returns the team page route.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/api/{lang}/team", get_with(team_page, team_page_docs))
        .with_path_items(|item| item.tag("Pages"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn unreachable_store_is_internal_error() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        let response = server.get("/api/ar/team").await;
        response.assert_status_internal_server_error();
        assert_eq!(
            response.json::<serde_json::Value>()["name"],
            "internal_server_error"
        );
        Ok(())
    }
}
