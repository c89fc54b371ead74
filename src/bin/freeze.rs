//! Static site generator - freezes every page into an output directory.

use std::path::PathBuf;

use anyhow::Result;

fn main() -> Result<()> {
    chartdeck::init_tracing();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("docs"));
    let written = chartdeck::web::freeze_site(&out_dir)?;

    println!(
        "static site written: {} pages in {}",
        written.len(),
        out_dir.display()
    );
    Ok(())
}
