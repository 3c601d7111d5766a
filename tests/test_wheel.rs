use std::f64::consts::FRAC_PI_2;

use natal_chart::chart::compute_chart;
use natal_chart::julian::J2000;
use natal_chart::wheel::*;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn paris_svg(style: &WheelStyle) -> String {
    let chart = compute_chart(J2000, 48.8566, 2.3522).unwrap();
    render_wheel_svg(&chart, style)
}

#[test]
fn test_angle_from_longitude() {
    assert_eq!(angle_from_longitude(0.0), 0.0);
    assert_approx!(angle_from_longitude(90.0), -FRAC_PI_2, 1e-12);
    assert_approx!(angle_from_longitude(450.0), -FRAC_PI_2, 1e-12);
    assert_approx!(angle_from_longitude(-90.0), -3.0 * FRAC_PI_2, 1e-12);
}

#[test]
fn test_svg_document_shape() {
    let svg = paris_svg(&WheelStyle::default());
    assert!(svg.starts_with("<svg "));
    assert!(svg.ends_with("</svg>\n"));
    assert!(svg.contains(r#"width="420" height="420""#));
}

#[test]
fn test_svg_element_counts() {
    let svg = paris_svg(&WheelStyle::default());
    // 12 sign ticks, 12 house cusps, ASC and MC markers
    assert_eq!(svg.matches("<line ").count(), 26);
    // 12 glyphs plus ASC and MC labels
    assert_eq!(svg.matches("<text ").count(), 14);
    // outer ring and Sun disc
    assert_eq!(svg.matches("<circle ").count(), 2);
}

#[test]
fn test_svg_labels() {
    let svg = paris_svg(&WheelStyle::default());
    assert!(svg.contains(">ASC</text>"));
    assert!(svg.contains(">MC</text>"));
    for glyph in ['♈', '♋', '♎', '♓'] {
        assert!(svg.contains(glyph), "missing {}", glyph);
    }
}

#[test]
fn test_aries_tick_points_right() {
    let svg = paris_svg(&WheelStyle { size: 200.0 });
    // 0° Aries: from r*0.98 = 98 to inner 55, both on the horizontal axis
    assert!(svg.contains(r#"<line x1="198.00" y1="100.00" x2="155.00" y2="100.00""#));
}
