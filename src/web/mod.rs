//! Web module - page templates, routing, dev server and static freeze

mod freeze;
mod routes;
mod server;
mod templates;

pub use freeze::freeze_site;
pub use routes::{dispatch, RouteResponse, FROZEN_ROUTES};
pub use server::serve;
pub use templates::PageTemplates;

use thiserror::Error;

use crate::charts::ChartError;

#[derive(Error, Debug)]
pub enum WebError {
    #[error("page render failed: {0}")]
    Render(#[from] ChartError),
    #[error("artifact {0} missing or of unexpected shape")]
    MissingArtifact(&'static str),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
