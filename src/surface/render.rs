//! SVG rendering of a regression scene.
//!
//! ## Purpose
//!
//! This module draws a [`Scene3d`] with plotters: the observations as a 3D
//! scatter colored by response, and the fitted plane as a translucent surface
//! on top of the same axes.
//!
//! ## Design notes
//!
//! * **Backend**: SVG only, either to a file or to an in-memory string.
//! * **Axes**: plotters' vertical axis is the second coordinate, so points are
//!   drawn as `(first regressor, response, second regressor)`.
//! * **Errors**: Backend failures are mapped to [`OlsError::Render`].
//!
//! ## Non-goals
//!
//! * This module does not open interactive windows.

// External dependencies
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;
use tracing::debug;

// Internal dependencies
use crate::primitives::errors::OlsError;
use crate::surface::scene::Scene3d;

// ============================================================================
// Options
// ============================================================================

/// Appearance of the rendered chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    /// Chart caption.
    pub title: String,

    /// Canvas size in pixels.
    pub size: (u32, u32),

    /// Rotation around the vertical axis, in radians.
    pub yaw: f64,

    /// Elevation of the view, in radians.
    pub pitch: f64,

    /// Zoom factor of the projection.
    pub scale: f64,

    /// Scatter marker radius in pixels.
    pub point_size: u32,

    /// Opacity of the fitted surface in [0, 1].
    pub surface_opacity: f64,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            title: "3D Visualization of Multinomial Linear Regression".to_string(),
            size: (1024, 768),
            yaw: 0.6,
            pitch: 0.35,
            scale: 0.85,
            point_size: 4,
            surface_opacity: 0.5,
        }
    }
}

// ============================================================================
// Entry Points
// ============================================================================

/// Render `scene` into an SVG file at `path`.
pub fn render_regression_3d<P: AsRef<Path>>(
    path: P,
    scene: &Scene3d,
    options: &PlotOptions,
) -> Result<(), OlsError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "rendering regression scene");
    let root = SVGBackend::new(path, options.size).into_drawing_area();
    draw(&root, scene, options)
}

/// Render `scene` into an SVG document held in memory.
pub fn render_regression_3d_svg(scene: &Scene3d, options: &PlotOptions) -> Result<String, OlsError> {
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, options.size).into_drawing_area();
        draw(&root, scene, options)?;
    }
    Ok(buf)
}

// ============================================================================
// Drawing
// ============================================================================

/// Viridis anchors, dark to bright.
const VIRIDIS: [(u8, u8, u8); 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

/// Interpolated Viridis color for `t` in [0, 1].
pub fn viridis(t: f64) -> RGBColor {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.5 };
    let pos = t * (VIRIDIS.len() - 1) as f64;
    let i = (pos.floor() as usize).min(VIRIDIS.len() - 2);
    let frac = pos - i as f64;
    let (a, b) = (VIRIDIS[i], VIRIDIS[i + 1]);
    let lerp = |u: u8, v: u8| (u as f64 + (v as f64 - u as f64) * frac).round() as u8;
    RGBColor(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

fn padded(lo: f64, hi: f64) -> Range<f64> {
    let span = hi - lo;
    let pad = if span > 0.0 { span * 0.05 } else { 0.5 };
    (lo - pad)..(hi + pad)
}

fn axis_range(vals: &[f64]) -> Range<f64> {
    let (lo, hi) = vals
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    padded(lo, hi)
}

fn render_err<E: std::fmt::Display>(e: E) -> OlsError {
    OlsError::Render(e.to_string())
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    scene: &Scene3d,
    options: &PlotOptions,
) -> Result<(), OlsError> {
    if scene.x.is_empty() {
        return Err(OlsError::EmptyInput);
    }

    root.fill(&WHITE).map_err(render_err)?;

    let (r_lo, r_hi) = scene.response_range();
    let r_span = if r_hi > r_lo { r_hi - r_lo } else { 1.0 };
    let shade = move |v: f64| viridis((v - r_lo) / r_span);

    let mut chart = ChartBuilder::on(root)
        .caption(&options.title, ("sans-serif", 22))
        .margin(20)
        .build_cartesian_3d(
            axis_range(&scene.x),
            padded(r_lo, r_hi),
            axis_range(&scene.y),
        )
        .map_err(render_err)?;

    chart.with_projection(|mut pb| {
        pb.yaw = options.yaw;
        pb.pitch = options.pitch;
        pb.scale = options.scale;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.15))
        .max_light_lines(3)
        .draw()
        .map_err(render_err)?;

    // Fitted plane
    let plane = &scene.grid.plane;
    let opacity = options.surface_opacity.clamp(0.0, 1.0);
    let surface_style = |v: &f64| shade(*v).mix(opacity).filled();
    chart
        .draw_series(
            SurfaceSeries::xoz(
                scene.grid.xs.iter().copied(),
                scene.grid.ys.iter().copied(),
                |a, b| plane.evaluate(a, b),
            )
            .style_func(&surface_style),
        )
        .map_err(render_err)?
        .label("fitted plane")
        .legend(move |(x, y)| {
            Rectangle::new([(x, y - 5), (x + 10, y + 5)], shade(r_hi).mix(opacity).filled())
        });

    // Observations
    let (x_label, y_label, z_label) = &scene.labels;
    let size = options.point_size;
    chart
        .draw_series(
            scene
                .x
                .iter()
                .zip(scene.y.iter())
                .zip(scene.response.iter())
                .map(|((&a, &b), &r)| Circle::new((a, r, b), size, shade(r).filled())),
        )
        .map_err(render_err)?
        .label(format!("observed ({x_label}, {y_label}, {z_label})"))
        .legend(move |(x, y)| Circle::new((x + 5, y), size, shade(r_lo).filled()));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}
