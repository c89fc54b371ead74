//! Charts module - the three renderer backends and page composition

mod artifact;
mod compose;
mod declarative;
mod interactive;
mod raster;

pub use artifact::{EmbedArtifact, FragmentPair};
pub use compose::{
    PageBundle, PageComposer, DECLARATIVE_CHART, INTERACTIVE_CHART, RASTER_CHART,
};
pub use declarative::{DeclarativeChart, DeclarativeStyle, TraceSpec};
pub use interactive::{ColumnSource, InteractiveChart, InteractiveStyle};
pub use raster::{RasterChart, RasterStyle};

use thiserror::Error;

use crate::data::SeriesError;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("invalid input series: {0}")]
    Series(#[from] SeriesError),
    #[error("raster drawing failed: {0}")]
    Draw(String),
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("figure serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
