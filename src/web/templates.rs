//! Page Templates Module
//! HTML assembly for the comparison and backend info pages. Artifact
//! strings are inserted verbatim; nothing here re-encodes them.

use super::WebError;
use crate::charts::{
    FragmentPair, PageBundle, DECLARATIVE_CHART, INTERACTIVE_CHART, RASTER_CHART,
};

/// Client library for the declarative backend, version-pinned.
const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// DOM target the declarative figure mounts into.
const DECLARATIVE_TARGET: &str = "declarative-chart";

const PAGE_SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>__TITLE__</title>
  <style>
    body { font-family: sans-serif; margin: 2rem auto; max-width: 960px; color: #222; }
    h1 { border-bottom: 2px solid #ccc; padding-bottom: 0.5rem; }
    nav a { margin-right: 1rem; }
    section.chart { margin-bottom: 3rem; }
    img.chart-image { max-width: 100%; }
  </style>
__HEAD__
</head>
<body>
  <h1>__TITLE__</h1>
  <nav>
    <a href="index.html">Comparison</a>
    <a href="raster.html">Raster</a>
    <a href="declarative.html">Declarative</a>
    <a href="interactive.html">Interactive</a>
  </nav>
__BODY__
</body>
</html>
"#;

/// Builds full pages out of embed artifacts and static copy.
pub struct PageTemplates;

impl PageTemplates {
    /// The comparison page: all three backends side by side. Loader tags go
    /// in the head; each chart's markup precedes its script in the body.
    pub fn comparison(bundle: &PageBundle) -> Result<String, WebError> {
        let image = bundle
            .inline_image(RASTER_CHART)
            .ok_or(WebError::MissingArtifact(RASTER_CHART))?;
        let document = bundle
            .declarative_document(DECLARATIVE_CHART)
            .ok_or(WebError::MissingArtifact(DECLARATIVE_CHART))?;
        let fragments = bundle
            .fragment_pair(INTERACTIVE_CHART)
            .ok_or(WebError::MissingArtifact(INTERACTIVE_CHART))?;

        let head = format!(
            "  <script src=\"{PLOTLY_CDN}\"></script>\n  {}",
            fragments.loader
        );
        let body = format!(
            "{}\n{}\n{}",
            Self::raster_section(image),
            Self::declarative_section(document),
            Self::interactive_section(fragments)
        );
        Ok(Self::page("Chart backend comparison", &head, &body))
    }

    /// An informational page for one backend.
    pub fn info(title: &str, content: &str) -> String {
        Self::page(title, "", &format!("  <article>\n{content}\n  </article>"))
    }

    pub fn not_found(path: &str) -> String {
        Self::page(
            "Not found",
            "",
            &format!("  <p>No page at <code>{path}</code>.</p>"),
        )
    }

    fn raster_section(image: &str) -> String {
        format!(
            "  <section class=\"chart\">\n\
             \x20   <h2>Raster backend</h2>\n\
             \x20   <img class=\"chart-image\" src=\"{image}\" alt=\"Raster chart\">\n\
             \x20 </section>"
        )
    }

    fn declarative_section(document: &str) -> String {
        format!(
            "  <section class=\"chart\">\n\
             \x20   <h2>Declarative backend</h2>\n\
             \x20   <div id=\"{DECLARATIVE_TARGET}\"></div>\n\
             \x20   <script type=\"text/javascript\">\n\
             \x20     var figure = {document};\n\
             \x20     Plotly.newPlot(\"{DECLARATIVE_TARGET}\", figure.data, figure.layout);\n\
             \x20   </script>\n\
             \x20 </section>"
        )
    }

    fn interactive_section(fragments: &FragmentPair) -> String {
        format!(
            "  <section class=\"chart\">\n\
             \x20   <h2>Interactive backend</h2>\n\
             \x20   {}\n\
             \x20   {}\n\
             \x20 </section>",
            fragments.markup, fragments.script
        )
    }

    fn page(title: &str, head: &str, body: &str) -> String {
        PAGE_SHELL
            .replace("__TITLE__", title)
            .replace("__HEAD__", head)
            .replace("__BODY__", body)
    }
}

// Static copy for the three info pages.

pub(super) const RASTER_INFO: &str = "\
    <h2>What is it?</h2>\n\
    <p>The raster backend draws the chart server-side and ships a finished\n\
    bitmap. The page embeds it as a <code>data:</code> URI, so it displays\n\
    with no script and no external asset.</p>\n\
    <h2>How does it work?</h2>\n\
    <p>A figure is drawn into a per-request pixel buffer, encoded to PNG\n\
    and base64-wrapped into an inline image string.</p>\n\
    <h2>Strengths</h2>\n\
    <ul>\n\
    <li>Self-contained output, ideal for reports and static hosting.</li>\n\
    <li>Identical rendering everywhere; no client runtime involved.</li>\n\
    </ul>\n\
    <h2>Limitations</h2>\n\
    <ul>\n\
    <li>Not interactive: no zoom, no hover.</li>\n\
    <li>Payload grows with image resolution.</li>\n\
    </ul>";

pub(super) const DECLARATIVE_INFO: &str = "\
    <h2>What is it?</h2>\n\
    <p>The declarative backend never draws. It describes the figure as\n\
    data: a list of traces plus a layout object, serialized to JSON.</p>\n\
    <h2>How does it work?</h2>\n\
    <p>The JSON document is placed into the page as a script body and a\n\
    client-side library reads its <code>data</code> and <code>layout</code>\n\
    fields to materialize the chart in the browser.</p>\n\
    <h2>Strengths</h2>\n\
    <ul>\n\
    <li>Interactive out of the box: zoom, tooltips, selection.</li>\n\
    <li>The figure is inspectable, diffable plain data.</li>\n\
    </ul>\n\
    <h2>Limitations</h2>\n\
    <ul>\n\
    <li>Requires the client library and JavaScript to display anything.</li>\n\
    </ul>";

pub(super) const INTERACTIVE_INFO: &str = "\
    <h2>What is it?</h2>\n\
    <p>The interactive backend models the figure as glyphs bound to a\n\
    columnar data source and emits paired markup and script fragments.</p>\n\
    <h2>How does it work?</h2>\n\
    <p>The markup fragment carries a generated mount target; the script\n\
    fragment instantiates the scene into that target; a version-pinned CDN\n\
    tag loads the client runtime. The three pieces are inserted into the\n\
    page together, loader first.</p>\n\
    <h2>Strengths</h2>\n\
    <ul>\n\
    <li>Full client-side interactivity over a compact scene description.</li>\n\
    <li>Multiple glyphs can share one data source.</li>\n\
    </ul>\n\
    <h2>Limitations</h2>\n\
    <ul>\n\
    <li>Markup and script are only valid as a pair; they cannot be\n\
    embedded independently.</li>\n\
    </ul>";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::PageComposer;

    #[test]
    fn comparison_page_places_artifacts_in_the_documented_order() {
        let bundle = PageComposer::compose().unwrap();
        let page = PageTemplates::comparison(&bundle).unwrap();

        let loader = page.find("echarts@").unwrap();
        let markup = page.find("chartdeck-fig-").unwrap();
        let script = page.find("echarts.init").unwrap();
        assert!(loader < markup, "loader must precede the markup");
        assert!(markup < script, "markup must precede the script");

        assert!(page.contains("data:image/png;base64,"));
        assert!(page.contains(PLOTLY_CDN));
        assert!(page.contains("Plotly.newPlot"));
    }

    #[test]
    fn info_page_carries_title_and_content() {
        let page = PageTemplates::info("Raster backend", RASTER_INFO);
        assert!(page.contains("<h1>Raster backend</h1>"));
        assert!(page.contains("data:"));
    }
}
