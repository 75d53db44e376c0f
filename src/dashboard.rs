mod hero;
mod table;

use serde::Serialize;

pub(crate) use self::{hero::Hero, table::TableView};
use crate::{
    chart::{ChartPlanner, ChartSpec},
    response::QueryResponse,
};

/// Everything the renderer needs to show one answered question.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub(crate) enum DashboardView {
    Failure {
        message: String,
    },
    Success {
        row_count: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        hero: Option<Hero>,
        charts: Vec<ChartSpec>,
        #[serde(skip_serializing_if = "Option::is_none")]
        table: Option<TableView>,
    },
}

impl DashboardView {
    pub(crate) fn from_response(response: &QueryResponse, planner: &ChartPlanner) -> Self {
        if !response.success {
            return Self::Failure {
                message: response.user_message(),
            };
        }

        let hint = response.chart.as_ref();
        Self::Success {
            row_count: response.row_count,
            hero: Hero::from_result(hint, &response.data),
            charts: planner.plan(hint, &response.data),
            table: TableView::new(&response.columns, &response.data),
        }
    }
}
