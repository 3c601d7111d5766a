use serde::Deserialize;

use crate::angles::{deg_to_rad, normalize_angle};
use crate::types::ChartResult;
use crate::zodiac::{ZodiacSign, DEGREES_PER_SIGN};

const INK: &str = "#111827";
const HOUSE_STROKE: &str = "#9ca3af";
const ASC_COLOR: &str = "#10b981";
const MC_COLOR: &str = "#3b82f6";
const SUN_FILL: &str = "#ef4444";
const SUN_STROKE: &str = "#991b1b";

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct WheelStyle {
    /// Side of the square drawing, in SVG user units.
    pub size: f64,
}

impl Default for WheelStyle {
    fn default() -> Self {
        Self { size: 420.0 }
    }
}

// SVG y grows downward, so longitudes advance counter-clockwise via the negated angle.
pub fn angle_from_longitude(longitude: f64) -> f64 {
    -deg_to_rad(normalize_angle(longitude))
}

struct Geometry {
    cx: f64,
    cy: f64,
    r: f64,
    inner_r: f64,
    house_r: f64,
}

impl Geometry {
    fn new(size: f64) -> Self {
        let r = size / 2.0;
        Self {
            cx: r,
            cy: r,
            r,
            inner_r: r * 0.55,
            house_r: r * 0.9,
        }
    }

    fn point(&self, angle: f64, radius: f64) -> (f64, f64) {
        (
            self.cx + radius * angle.cos(),
            self.cy + radius * angle.sin(),
        )
    }

    fn radial_line(&self, longitude: f64, outer: f64, inner: f64, stroke: &str, width: f64) -> String {
        let a = angle_from_longitude(longitude);
        let (x1, y1) = self.point(a, outer);
        let (x2, y2) = self.point(a, inner);
        format!(
            r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{stroke}" stroke-width="{width}"/>"#
        )
    }
}

pub fn render_wheel_svg(chart: &ChartResult, style: &WheelStyle) -> String {
    let size = style.size;
    let g = Geometry::new(size);
    let mut svg = String::new();

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}" role="img" aria-label="Natal chart wheel">"#
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r##"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="#fff" stroke="{INK}" stroke-width="2"/>"##,
        g.cx,
        g.cy,
        g.r - 2.0
    ));
    svg.push('\n');

    for sign in ZodiacSign::ALL {
        svg.push_str(&g.radial_line(sign.start_longitude(), g.r * 0.98, g.inner_r, INK, 2.0));
        svg.push('\n');
    }

    for sign in ZodiacSign::ALL {
        let a = angle_from_longitude(sign.start_longitude() + DEGREES_PER_SIGN / 2.0);
        let (x, y) = g.point(a, (g.r + g.inner_r) / 2.0);
        svg.push_str(&format!(
            r#"<text x="{x:.2}" y="{y:.2}" text-anchor="middle" dominant-baseline="middle" font-size="18" font-weight="700">{}</text>"#,
            sign.glyph()
        ));
        svg.push('\n');
    }

    for &cusp in &chart.houses {
        svg.push_str(&g.radial_line(cusp, g.house_r, g.inner_r * 0.6, HOUSE_STROKE, 1.5));
        svg.push('\n');
    }

    svg.push_str(&g.radial_line(chart.ascendant, g.r * 0.98, g.inner_r * 0.4, ASC_COLOR, 3.0));
    svg.push('\n');
    svg.push_str(&format!(
        r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="12" fill="{ASC_COLOR}">ASC</text>"#,
        g.cx,
        g.cy - g.inner_r * 0.5
    ));
    svg.push('\n');

    svg.push_str(&g.radial_line(chart.midheaven, g.r * 0.98, g.inner_r * 0.4, MC_COLOR, 3.0));
    svg.push('\n');
    svg.push_str(&format!(
        r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="12" fill="{MC_COLOR}">MC</text>"#,
        g.cx,
        g.cy + g.inner_r * 0.5
    ));
    svg.push('\n');

    let (sx, sy) = g.point(
        angle_from_longitude(chart.sun_longitude),
        (g.inner_r + g.house_r) / 2.0,
    );
    svg.push_str(&format!(
        r#"<circle cx="{sx:.2}" cy="{sy:.2}" r="6" fill="{SUN_FILL}" stroke="{SUN_STROKE}" stroke-width="1"/>"#
    ));
    svg.push('\n');
    svg.push_str("</svg>\n");
    svg
}
