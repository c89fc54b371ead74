//! Page Composer Module
//! Fans out to the three backends and collects their artifacts into one
//! named bundle for the templating layer.

use std::collections::BTreeMap;

use super::{
    ChartError, DeclarativeChart, DeclarativeStyle, EmbedArtifact, FragmentPair,
    InteractiveChart, InteractiveStyle, RasterChart, RasterStyle, TraceSpec,
};
use crate::data::{SampleData, Series};

/// Artifact names fixed by the page contract.
pub const RASTER_CHART: &str = "raster";
pub const DECLARATIVE_CHART: &str = "declarative";
pub const INTERACTIVE_CHART: &str = "interactive";

/// Display name and line color per declarative trace, in draw order.
const TRACE_TAGS: [(&str, &str); 3] = [("Set 1", "red"), ("Set 2", "blue"), ("Set 3", "purple")];

/// Named collection of embed artifacts for one rendered page. Rebuilt on
/// every request; holds no shared state.
#[derive(Debug, Clone)]
pub struct PageBundle {
    artifacts: BTreeMap<&'static str, EmbedArtifact>,
}

impl PageBundle {
    pub fn get(&self, name: &str) -> Option<&EmbedArtifact> {
        self.artifacts.get(name)
    }

    /// Artifact names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.artifacts.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// The named artifact, if present and an inline image.
    pub fn inline_image(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(EmbedArtifact::InlineImage(uri)) => Some(uri),
            _ => None,
        }
    }

    /// The named artifact, if present and a declarative document.
    pub fn declarative_document(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(EmbedArtifact::DeclarativeDocument(document)) => Some(document),
            _ => None,
        }
    }

    /// The named artifact, if present and a fragment pair.
    pub fn fragment_pair(&self, name: &str) -> Option<&FragmentPair> {
        match self.get(name) {
            Some(EmbedArtifact::FragmentPair(fragments)) => Some(fragments),
            _ => None,
        }
    }
}

/// Invokes the three backends and bundles the results. No retries, no
/// caching: every invocation regenerates every artifact, and the first
/// backend error aborts the bundle.
pub struct PageComposer;

impl PageComposer {
    /// Compose the comparison page's bundle from the sample dataset.
    pub fn compose() -> Result<PageBundle, ChartError> {
        Self::compose_with(&SampleData::shared(), &Self::sample_traces())
    }

    /// Compose from explicit inputs. The backends are independent; order
    /// is irrelevant.
    pub fn compose_with(
        shared: &Series,
        traces: &[TraceSpec],
    ) -> Result<PageBundle, ChartError> {
        let raster = RasterChart::render(shared, &RasterStyle::default())?;
        let declarative = DeclarativeChart::render(traces, &DeclarativeStyle::default())?;
        let interactive = InteractiveChart::render(shared, &InteractiveStyle::default())?;

        let mut artifacts = BTreeMap::new();
        artifacts.insert(RASTER_CHART, raster);
        artifacts.insert(DECLARATIVE_CHART, declarative);
        artifacts.insert(INTERACTIVE_CHART, interactive);
        Ok(PageBundle { artifacts })
    }

    /// The declarative trace list: the shared series plus its two
    /// companions, tagged in display order.
    pub fn sample_traces() -> Vec<TraceSpec> {
        let [second, third] = SampleData::companions();
        let series = [SampleData::shared(), second, third];
        series
            .into_iter()
            .zip(TRACE_TAGS)
            .map(|(series, (name, color))| TraceSpec::new(series, name, color))
            .collect()
    }
}
