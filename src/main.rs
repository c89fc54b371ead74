//! Chartdeck dev server - serves the comparison and backend info pages.

use anyhow::Result;

fn main() -> Result<()> {
    chartdeck::init_tracing();

    let addr =
        std::env::var("CHARTDECK_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".to_string());
    chartdeck::web::serve(&addr)
}
