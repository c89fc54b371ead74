//! Interactive Backend Module
//! Builds a glyph scene over a columnar data source and splits the output
//! into markup, script and runtime-loader fragments for the host page.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use super::{ChartError, EmbedArtifact, FragmentPair};
use crate::data::Series;

/// Client runtime, version-pinned on the CDN default.
const RUNTIME_CDN: &str = "https://cdn.jsdelivr.net/npm/echarts@5.5.1/dist/echarts.min.js";

// Mount targets get process-unique ids so two figures on one page never
// collide.
static NEXT_FIGURE_ID: AtomicU64 = AtomicU64::new(1);

/// Styling options recognized by the interactive backend.
#[derive(Debug, Clone)]
pub struct InteractiveStyle {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Figure size in CSS pixels.
    pub width: u32,
    pub height: u32,
    pub background: String,
    pub border_color: String,
    pub grid_color: String,
    pub axis_color: String,
    pub line_width: u32,
    pub line_color: String,
    pub marker_size: u32,
    pub marker_fill: String,
    pub marker_line: String,
}

impl Default for InteractiveStyle {
    fn default() -> Self {
        Self {
            title: "Sample values - Interactive".to_string(),
            x_label: "X".to_string(),
            y_label: "Y".to_string(),
            width: 900,
            height: 400,
            background: "white".to_string(),
            border_color: "black".to_string(),
            grid_color: "lightgray".to_string(),
            axis_color: "black".to_string(),
            line_width: 2,
            line_color: "purple".to_string(),
            marker_size: 8,
            marker_fill: "purple".to_string(),
            marker_line: "purple".to_string(),
        }
    }
}

/// Columnar data source feeding every glyph of one figure.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSource {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl ColumnSource {
    pub fn from_series(series: &Series) -> Self {
        Self {
            x: series.x().to_vec(),
            y: series.y().to_vec(),
        }
    }
}

// Wire structs for the client runtime's option schema.

#[derive(Serialize)]
struct SceneDocument<'a> {
    title: Title<'a>,
    #[serde(rename = "backgroundColor")]
    background_color: &'a str,
    dataset: Dataset,
    #[serde(rename = "xAxis")]
    x_axis: AxisOpts<'a>,
    #[serde(rename = "yAxis")]
    y_axis: AxisOpts<'a>,
    series: (LineGlyph<'a>, MarkerGlyph<'a>),
}

#[derive(Serialize)]
struct Title<'a> {
    text: &'a str,
    left: &'static str,
    #[serde(rename = "textStyle")]
    text_style: TextStyle<'a>,
}

#[derive(Serialize)]
struct TextStyle<'a> {
    color: &'a str,
}

#[derive(Serialize)]
struct Dataset {
    source: ColumnSource,
}

#[derive(Serialize)]
struct AxisOpts<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(rename = "axisLine")]
    axis_line: LineStyleWrap<'a>,
    #[serde(rename = "splitLine")]
    split_line: LineStyleWrap<'a>,
}

#[derive(Serialize)]
struct LineStyleWrap<'a> {
    #[serde(rename = "lineStyle")]
    line_style: LineColor<'a>,
}

#[derive(Serialize)]
struct LineColor<'a> {
    color: &'a str,
}

/// Connected-line glyph bound to the shared column source.
#[derive(Serialize)]
struct LineGlyph<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    encode: Encode,
    #[serde(rename = "showSymbol")]
    show_symbol: bool,
    #[serde(rename = "lineStyle")]
    line_style: GlyphLineStyle<'a>,
    color: &'a str,
}

/// Circular-marker glyph bound to the shared column source.
#[derive(Serialize)]
struct MarkerGlyph<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    encode: Encode,
    #[serde(rename = "symbolSize")]
    symbol_size: u32,
    #[serde(rename = "itemStyle")]
    item_style: MarkerItemStyle<'a>,
}

#[derive(Serialize)]
struct Encode {
    x: &'static str,
    y: &'static str,
}

#[derive(Serialize)]
struct GlyphLineStyle<'a> {
    width: u32,
    color: &'a str,
}

#[derive(Serialize)]
struct MarkerItemStyle<'a> {
    color: &'a str,
    #[serde(rename = "borderColor")]
    border_color: &'a str,
}

/// Builds the scene and emits the {markup, script, loader} fragment pair.
pub struct InteractiveChart;

impl InteractiveChart {
    /// Render `series` into fragments that share one generated DOM id.
    ///
    /// An empty series still yields a valid (empty) figure; downstream
    /// composition never special-cases it.
    pub fn render(
        series: &Series,
        style: &InteractiveStyle,
    ) -> Result<EmbedArtifact, ChartError> {
        let scene = SceneDocument {
            title: Title {
                text: &style.title,
                left: "center",
                text_style: TextStyle {
                    color: &style.axis_color,
                },
            },
            background_color: &style.background,
            dataset: Dataset {
                source: ColumnSource::from_series(series),
            },
            x_axis: Self::axis(&style.x_label, style),
            y_axis: Self::axis(&style.y_label, style),
            series: (
                LineGlyph {
                    kind: "line",
                    encode: Encode { x: "x", y: "y" },
                    show_symbol: false,
                    line_style: GlyphLineStyle {
                        width: style.line_width,
                        color: &style.line_color,
                    },
                    color: &style.line_color,
                },
                MarkerGlyph {
                    kind: "scatter",
                    encode: Encode { x: "x", y: "y" },
                    symbol_size: style.marker_size,
                    item_style: MarkerItemStyle {
                        color: &style.marker_fill,
                        border_color: &style.marker_line,
                    },
                },
            ),
        };
        let option = serde_json::to_string(&scene)?;

        let figure_id = format!(
            "chartdeck-fig-{}",
            NEXT_FIGURE_ID.fetch_add(1, Ordering::Relaxed)
        );
        let markup = format!(
            "<div class=\"chartdeck-figure\" id=\"{figure_id}\" \
             style=\"width: {}px; height: {}px; border: 1px solid {};\"></div>",
            style.width, style.height, style.border_color
        );
        let script = format!(
            "<script type=\"text/javascript\">\n\
             (function () {{\n\
             \x20 var target = document.getElementById(\"{figure_id}\");\n\
             \x20 echarts.init(target).setOption({option});\n\
             }})();\n\
             </script>"
        );
        let loader = format!("<script src=\"{RUNTIME_CDN}\"></script>");

        Ok(EmbedArtifact::FragmentPair(FragmentPair {
            markup,
            script,
            loader,
        }))
    }

    fn axis<'a>(name: &'a str, style: &'a InteractiveStyle) -> AxisOpts<'a> {
        AxisOpts {
            name,
            kind: "value",
            axis_line: LineStyleWrap {
                line_style: LineColor {
                    color: &style.axis_color,
                },
            },
            split_line: LineStyleWrap {
                line_style: LineColor {
                    color: &style.grid_color,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SampleData;

    fn render_fragments(series: &Series) -> FragmentPair {
        let artifact = InteractiveChart::render(series, &InteractiveStyle::default()).unwrap();
        let EmbedArtifact::FragmentPair(fragments) = artifact else {
            panic!("expected a fragment-pair artifact");
        };
        fragments
    }

    fn extract_id(markup: &str) -> String {
        let start = markup.find("id=\"").expect("markup has an id") + 4;
        let end = markup[start..].find('"').unwrap() + start;
        markup[start..end].to_string()
    }

    #[test]
    fn script_references_the_markup_dom_id() {
        let fragments = render_fragments(&SampleData::shared());
        let id = extract_id(&fragments.markup);
        assert!(fragments.markup.contains("<div"));
        assert!(fragments.script.contains(&id));
        assert!(fragments.loader.contains("echarts@5.5.1"));
    }

    #[test]
    fn scene_option_carries_both_glyphs_and_the_column_source() {
        let fragments = render_fragments(&SampleData::shared());
        let start = fragments.script.find("setOption(").unwrap() + "setOption(".len();
        let end = fragments.script[start..].find(");").unwrap() + start;
        let option: serde_json::Value =
            serde_json::from_str(&fragments.script[start..end]).unwrap();
        assert_eq!(option["series"].as_array().unwrap().len(), 2);
        assert_eq!(option["series"][0]["type"], "line");
        assert_eq!(option["series"][1]["type"], "scatter");
        assert_eq!(
            option["dataset"]["source"]["x"],
            serde_json::json!([1.0, 2.0, 3.0, 4.0, 5.0])
        );
    }

    #[test]
    fn empty_series_still_emits_all_three_fragments() {
        let empty = Series::new(Vec::new(), Vec::new()).unwrap();
        let fragments = render_fragments(&empty);
        assert!(!fragments.markup.is_empty());
        assert!(!fragments.script.is_empty());
        assert!(!fragments.loader.is_empty());
    }

    #[test]
    fn successive_renders_use_distinct_ids() {
        let first = extract_id(&render_fragments(&SampleData::shared()).markup);
        let second = extract_id(&render_fragments(&SampleData::shared()).markup);
        assert_ne!(first, second);
    }
}
