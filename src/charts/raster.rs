//! Raster Backend Module
//! Draws a line chart with plotters and packages the finished bitmap as a
//! self-contained inline-image string.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use parking_lot::Mutex;
use plotters::prelude::*;

use super::{ChartError, EmbedArtifact};
use crate::data::Series;

/// Gridline color (lightgray)
const GRID_COLOR: RGBColor = RGBColor(211, 211, 211);

// One raster render at a time; the figure arena and font cache must not be
// shared mid-draw across concurrent page renders.
static RENDER_LOCK: Mutex<()> = Mutex::new(());

/// Styling options recognized by the raster backend.
#[derive(Debug, Clone)]
pub struct RasterStyle {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub line_color: RGBColor,
    pub grid: bool,
    pub background: RGBColor,
    /// Output bitmap size in pixels.
    pub width: u32,
    pub height: u32,
}

impl Default for RasterStyle {
    fn default() -> Self {
        Self {
            title: "Sample values - Raster".to_string(),
            x_label: "X".to_string(),
            y_label: "Y".to_string(),
            line_color: RED,
            grid: true,
            background: WHITE,
            width: 1000,
            height: 400,
        }
    }
}

/// Renders a series as a connected line with point markers and encodes the
/// result as `data:image/png;base64,...`.
///
/// The whole figure lives in a per-call pixel arena: created, drawn into,
/// encoded and dropped before this function returns, so repeated renders
/// accumulate no figure state.
pub struct RasterChart;

impl RasterChart {
    /// Render `series` to an inline-image artifact.
    pub fn render(series: &Series, style: &RasterStyle) -> Result<EmbedArtifact, ChartError> {
        series.ensure_non_empty()?;

        let _guard = RENDER_LOCK.lock();

        let mut arena = vec![0u8; (style.width * style.height * 3) as usize];
        Self::draw(series, style, &mut arena)?;

        let mut png = Vec::new();
        PngEncoder::new(&mut png).write_image(
            &arena,
            style.width,
            style.height,
            ExtendedColorType::Rgb8,
        )?;

        let payload = BASE64.encode(&png);
        Ok(EmbedArtifact::InlineImage(format!(
            "data:image/png;base64,{payload}"
        )))
    }

    /// Draw the figure into the pixel arena. Nothing plotters-side outlives
    /// this call.
    fn draw(series: &Series, style: &RasterStyle, arena: &mut [u8]) -> Result<(), ChartError> {
        let root =
            BitMapBackend::with_buffer(arena, (style.width, style.height)).into_drawing_area();
        root.fill(&style.background)
            .map_err(|e| ChartError::Draw(e.to_string()))?;

        // Pad the data bounds so edge markers are not clipped.
        let (x_min, x_max) = series.x_range();
        let (y_min, y_max) = series.y_range();
        let x_pad = ((x_max - x_min) * 0.05).max(0.5);
        let y_pad = ((y_max - y_min) * 0.05).max(0.5);

        let mut chart = ChartBuilder::on(&root)
            .caption(&style.title, ("sans-serif", 22))
            .margin(12)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(x_min - x_pad..x_max + x_pad, y_min - y_pad..y_max + y_pad)
            .map_err(|e| ChartError::Draw(e.to_string()))?;

        let mut mesh = chart.configure_mesh();
        mesh.x_desc(style.x_label.as_str())
            .y_desc(style.y_label.as_str());
        if style.grid {
            mesh.light_line_style(GRID_COLOR);
        } else {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(|e| ChartError::Draw(e.to_string()))?;

        chart
            .draw_series(LineSeries::new(
                series.points(),
                style.line_color.stroke_width(2),
            ))
            .map_err(|e| ChartError::Draw(e.to_string()))?;
        chart
            .draw_series(
                series
                    .points()
                    .map(|point| Circle::new(point, 4, style.line_color.filled())),
            )
            .map_err(|e| ChartError::Draw(e.to_string()))?;

        root.present().map_err(|e| ChartError::Draw(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{SampleData, SeriesError};

    const PNG_MAGIC: [u8; 4] = [0x89, b'P', b'N', b'G'];

    fn decode_payload(artifact: &EmbedArtifact) -> Vec<u8> {
        let EmbedArtifact::InlineImage(uri) = artifact else {
            panic!("expected an inline-image artifact");
        };
        let payload = uri
            .strip_prefix("data:image/png;base64,")
            .expect("data URI prefix");
        BASE64.decode(payload).expect("payload is valid base64")
    }

    #[test]
    fn renders_sample_series_to_a_png_data_uri() {
        let artifact =
            RasterChart::render(&SampleData::shared(), &RasterStyle::default()).unwrap();
        let png = decode_payload(&artifact);
        assert!(!png.is_empty());
        assert_eq!(&png[..4], &PNG_MAGIC);
    }

    #[test]
    fn rejects_an_empty_series() {
        let empty = Series::new(Vec::new(), Vec::new()).unwrap();
        let err = RasterChart::render(&empty, &RasterStyle::default()).unwrap_err();
        assert!(matches!(err, ChartError::Series(SeriesError::Empty)));
    }

    #[test]
    fn concurrent_renders_all_produce_valid_images() {
        let handles: Vec<_> = (0..3)
            .map(|_| {
                std::thread::spawn(|| {
                    RasterChart::render(&SampleData::shared(), &RasterStyle::default())
                })
            })
            .collect();
        for handle in handles {
            let artifact = handle.join().unwrap().unwrap();
            let png = decode_payload(&artifact);
            assert_eq!(&png[..4], &PNG_MAGIC);
        }
    }
}
