use async_graphql::{Context, Json, Object, Result};
use serde_json::Value;
use tracing::debug;

use crate::{
    api::ServiceState, chart::ChartSpec, dashboard::DashboardView, response::QueryResponse,
};

#[derive(Default)]
pub(super) struct DashboardQuery;

#[Object]
impl DashboardQuery {
    /// Chart panels for a Query Service response, in display order.
    #[allow(clippy::unused_async)]
    async fn plan_charts(
        &self,
        ctx: &Context<'_>,
        response: Json<Value>,
    ) -> Result<Json<Vec<ChartSpec>>> {
        let state = ctx.data::<ServiceState>()?;
        let response = parse_response(response)?;
        let charts = state
            .planner
            .plan(response.chart.as_ref(), &response.data);
        debug!(panels = charts.len(), "Planned charts");
        Ok(Json(charts))
    }

    /// The full view model for one answered question.
    #[allow(clippy::unused_async)]
    async fn dashboard(
        &self,
        ctx: &Context<'_>,
        response: Json<Value>,
    ) -> Result<Json<DashboardView>> {
        let state = ctx.data::<ServiceState>()?;
        let response = parse_response(response)?;
        Ok(Json(DashboardView::from_response(&response, &state.planner)))
    }
}

fn parse_response(Json(value): Json<Value>) -> Result<QueryResponse> {
    QueryResponse::from_json(value)
        .map_err(|e| async_graphql::Error::new(format!("invalid query response: {e}")))
}
