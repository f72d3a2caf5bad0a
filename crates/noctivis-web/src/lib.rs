//! noctivis-web — the portfolio web server.
//! Renders the single-page academic portfolio and fronts the research
//! assistant:
//!   - server-rendered sections from the static content catalog
//!   - one proxied generative-text call per assistant question
//!   - JSON read endpoints for the catalog and section metadata

pub mod assistant;
pub mod config;
pub mod handlers;
pub mod nav;
pub mod router;
pub mod state;
