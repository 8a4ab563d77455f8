//! Gene ranking API.

use axum::{extract::State, Json};
use genewatch_ranker::{build_report, GeneRiskReport};
use tracing::debug;

use crate::state::SharedState;

/// GET /genes — genes in priority order with their risk counts
pub async fn api_genes(State(state): State<SharedState>) -> Json<Vec<GeneRiskReport>> {
    let report = build_report(&state.genes);
    debug!(n_genes = state.genes.len(), n_ranked = report.len(), "Built gene report");
    Json(report)
}
