//! Declarative Backend Module
//! Builds a figure as trace + layout data and serializes it to a JSON
//! document materialized client-side by Plotly.

use serde::Serialize;

use super::{ChartError, EmbedArtifact};
use crate::data::{Series, SeriesError};

/// One input series tagged for display.
#[derive(Debug, Clone)]
pub struct TraceSpec {
    pub series: Series,
    pub name: String,
    pub color: String,
}

impl TraceSpec {
    pub fn new(series: Series, name: &str, color: &str) -> Self {
        Self {
            series,
            name: name.to_string(),
            color: color.to_string(),
        }
    }
}

/// Styling shared by the whole declarative figure.
#[derive(Debug, Clone)]
pub struct DeclarativeStyle {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub plot_background: String,
    pub paper_background: String,
    pub grid_color: String,
    pub font_color: String,
    pub height: u32,
    pub marker_size: u32,
    pub line_width: u32,
}

impl Default for DeclarativeStyle {
    fn default() -> Self {
        Self {
            title: "Sample values - Declarative".to_string(),
            x_label: "X".to_string(),
            y_label: "Y".to_string(),
            plot_background: "white".to_string(),
            paper_background: "white".to_string(),
            grid_color: "lightgray".to_string(),
            font_color: "black".to_string(),
            height: 400,
            marker_size: 10,
            line_width: 2,
        }
    }
}

// Wire structs for the client library's figure schema.

#[derive(Serialize)]
struct Trace<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    x: &'a [f64],
    y: &'a [f64],
    mode: &'static str,
    name: &'a str,
    line: LineStyle<'a>,
    marker: MarkerStyle,
}

#[derive(Serialize)]
struct LineStyle<'a> {
    color: &'a str,
    width: u32,
}

#[derive(Serialize)]
struct MarkerStyle {
    size: u32,
}

#[derive(Serialize)]
struct Axis<'a> {
    title: &'a str,
    gridcolor: &'a str,
    zerolinecolor: &'static str,
    linecolor: &'static str,
    mirror: bool,
}

#[derive(Serialize)]
struct Font<'a> {
    color: &'a str,
}

#[derive(Serialize)]
struct Layout<'a> {
    title: &'a str,
    xaxis: Axis<'a>,
    yaxis: Axis<'a>,
    plot_bgcolor: &'a str,
    paper_bgcolor: &'a str,
    font: Font<'a>,
    height: u32,
}

#[derive(Serialize)]
struct FigureDocument<'a> {
    data: Vec<Trace<'a>>,
    layout: Layout<'a>,
}

/// Builds the ordered trace list plus layout and serializes the figure.
/// No image is produced; rendering is deferred to the client library.
pub struct DeclarativeChart;

impl DeclarativeChart {
    /// Render `traces` to a declarative-document artifact. The document
    /// round-trips through JSON parsing into `data` and `layout` fields.
    pub fn render(
        traces: &[TraceSpec],
        style: &DeclarativeStyle,
    ) -> Result<EmbedArtifact, ChartError> {
        if traces.is_empty() {
            return Err(ChartError::Series(SeriesError::Empty));
        }
        for trace in traces {
            trace.series.ensure_non_empty()?;
        }

        let data: Vec<Trace> = traces
            .iter()
            .map(|trace| Trace {
                kind: "scatter",
                x: trace.series.x(),
                y: trace.series.y(),
                mode: "lines+markers",
                name: &trace.name,
                line: LineStyle {
                    color: &trace.color,
                    width: style.line_width,
                },
                marker: MarkerStyle {
                    size: style.marker_size,
                },
            })
            .collect();

        let layout = Layout {
            title: &style.title,
            xaxis: Self::axis(&style.x_label, &style.grid_color),
            yaxis: Self::axis(&style.y_label, &style.grid_color),
            plot_bgcolor: &style.plot_background,
            paper_bgcolor: &style.paper_background,
            font: Font {
                color: &style.font_color,
            },
            height: style.height,
        };

        let document = serde_json::to_string(&FigureDocument { data, layout })?;
        Ok(EmbedArtifact::DeclarativeDocument(document))
    }

    fn axis<'a>(title: &'a str, grid_color: &'a str) -> Axis<'a> {
        Axis {
            title,
            gridcolor: grid_color,
            zerolinecolor: "black",
            linecolor: "black",
            mirror: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SampleData;
    use serde_json::Value;

    fn sample_traces() -> Vec<TraceSpec> {
        let [second, third] = SampleData::companions();
        vec![
            TraceSpec::new(SampleData::shared(), "Set 1", "red"),
            TraceSpec::new(second, "Set 2", "blue"),
            TraceSpec::new(third, "Set 3", "purple"),
        ]
    }

    fn render_to_value(traces: &[TraceSpec]) -> Value {
        let artifact = DeclarativeChart::render(traces, &DeclarativeStyle::default()).unwrap();
        let EmbedArtifact::DeclarativeDocument(document) = artifact else {
            panic!("expected a declarative-document artifact");
        };
        serde_json::from_str(&document).expect("document is valid JSON")
    }

    #[test]
    fn document_has_one_trace_per_series() {
        let value = render_to_value(&sample_traces());
        let data = value["data"].as_array().unwrap();
        assert_eq!(data.len(), 3);
        assert!(value["layout"].is_object());
    }

    #[test]
    fn first_trace_round_trips_the_sample_values() {
        let value = render_to_value(&sample_traces());
        assert_eq!(value["data"][0]["x"], serde_json::json!([1.0, 2.0, 3.0, 4.0, 5.0]));
        assert_eq!(
            value["data"][0]["y"],
            serde_json::json!([10.0, 15.0, 13.0, 17.0, 22.0])
        );
        assert_eq!(value["data"][0]["mode"], "lines+markers");
        assert_eq!(value["data"][1]["name"], "Set 2");
    }

    #[test]
    fn rejects_empty_input() {
        let err = DeclarativeChart::render(&[], &DeclarativeStyle::default()).unwrap_err();
        assert!(matches!(err, ChartError::Series(SeriesError::Empty)));

        let empty = TraceSpec::new(
            Series::new(Vec::new(), Vec::new()).unwrap(),
            "Empty",
            "red",
        );
        let err = DeclarativeChart::render(&[empty], &DeclarativeStyle::default()).unwrap_err();
        assert!(matches!(err, ChartError::Series(SeriesError::Empty)));
    }
}
