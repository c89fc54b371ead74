//! Routes Module
//! In-process request dispatch shared by the dev server and the freezer.

use super::templates::{self, PageTemplates};
use super::WebError;
use crate::charts::PageComposer;

const CONTENT_TYPE_HTML: &str = "text/html; charset=utf-8";

/// A dispatched page response.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

/// Routes captured by the freezer, with their output file names.
pub const FROZEN_ROUTES: [(&str, &str); 4] = [
    ("/", "index.html"),
    ("/backend/raster", "raster.html"),
    ("/backend/declarative", "declarative.html"),
    ("/backend/interactive", "interactive.html"),
];

/// Resolve `path` to a full page. Artifacts are regenerated on every call;
/// nothing is cached. Flat `.html` aliases keep in-page links working on
/// the frozen site and under the dev server alike.
pub fn dispatch(path: &str) -> Result<RouteResponse, WebError> {
    let path = path.split('?').next().unwrap_or(path);
    let body = match path {
        "/" | "/index.html" => {
            let bundle = PageComposer::compose()?;
            PageTemplates::comparison(&bundle)?
        }
        "/backend/raster" | "/raster.html" => {
            PageTemplates::info("Raster backend", templates::RASTER_INFO)
        }
        "/backend/declarative" | "/declarative.html" => {
            PageTemplates::info("Declarative backend", templates::DECLARATIVE_INFO)
        }
        "/backend/interactive" | "/interactive.html" => {
            PageTemplates::info("Interactive backend", templates::INTERACTIVE_INFO)
        }
        _ => {
            return Ok(RouteResponse {
                status: 404,
                content_type: CONTENT_TYPE_HTML,
                body: PageTemplates::not_found(path),
            })
        }
    };
    Ok(RouteResponse {
        status: 200,
        content_type: CONTENT_TYPE_HTML,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_route_embeds_all_three_backends() {
        let response = dispatch("/").unwrap();
        assert_eq!(response.status, 200);
        assert!(response.body.contains("data:image/png;base64,"));
        assert!(response.body.contains("Plotly.newPlot"));
        assert!(response.body.contains("echarts.init"));
    }

    #[test]
    fn info_routes_resolve_under_both_spellings() {
        for path in ["/backend/raster", "/raster.html"] {
            let response = dispatch(path).unwrap();
            assert_eq!(response.status, 200);
            assert!(response.body.contains("Raster backend"));
        }
    }

    #[test]
    fn unknown_path_is_a_404_page() {
        let response = dispatch("/missing").unwrap();
        assert_eq!(response.status, 404);
        assert!(response.body.contains("/missing"));
    }

    #[test]
    fn query_strings_are_ignored() {
        let response = dispatch("/backend/declarative?theme=dark").unwrap();
        assert_eq!(response.status, 200);
    }
}
