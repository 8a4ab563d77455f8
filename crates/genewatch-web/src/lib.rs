//! genewatch-web — HTTP front end for genewatch.
//! Serves:
//!   - GET /genes    ranked gene risk report
//!   - GET /get/rss  cached news feed as JSON articles

pub mod config;
pub mod router;
pub mod handlers;
pub mod state;
