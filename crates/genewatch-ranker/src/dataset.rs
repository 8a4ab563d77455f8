//! Loading gene sets from JSON or YAML files.
//!
//! Expected shape (JSON shown; YAML is the same structure):
//!
//! ```json
//! [
//!   { "gene": "BRCA1", "assessments": [
//!       { "condition": "breast cancer", "risk": "high" }
//!   ] }
//! ]
//! ```
//!
//! `risk` is accepted as an alias for `assessments`.

use std::path::Path;

use genewatch_common::{GeneRisk, GenewatchError, Result};
use tracing::info;

/// Read a gene set from `path`. The format is picked by file extension.
pub fn load_gene_file(path: &Path) -> Result<Vec<GeneRisk>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let content = std::fs::read_to_string(path)?;
    let genes: Vec<GeneRisk> = match ext.as_str() {
        "json"         => serde_json::from_str(&content)?,
        "yaml" | "yml" => serde_yaml::from_str(&content)?,
        _ => {
            return Err(GenewatchError::Config(format!(
                "Unsupported gene data file {:?}: expected .json, .yaml or .yml",
                path
            )))
        }
    };

    info!(path = %path.display(), n_genes = genes.len(), "Loaded gene data file");
    Ok(genes)
}
