use crate::error::Result;
use crate::operations::{BurstRibbon, ThicknessLayer};
use crate::path::PathString;
use crate::shading::{dynamic_shift, metallic_gradient, specular_stops, ColorStop};

use super::escape_attr;

/// Attributes used by [`path_element`] when none are given.
pub const DEFAULT_PATH_ATTRS: [(&str, &str); 3] =
    [("fill", "none"), ("stroke", "#ff69b4"), ("stroke-width", "2")];

/// Stock bubble color for metallic badges.
pub const BASE_PURPLE: &str = "#b829dd";

/// Intensity of the metallic ramp used by [`metallic_ribbon_svg`].
const BADGE_INTENSITY: f64 = 1.2;

/// Canvas color behind a burst.
const BURST_BACKGROUND: &str = "#0a0a0a";

/// Formats `<path d="..." .../>`.
///
/// An empty `attrs` slice falls back to [`DEFAULT_PATH_ATTRS`]. Keys and
/// values are escaped.
#[must_use]
pub fn path_element(path: &PathString, attrs: &[(&str, &str)]) -> String {
    let attrs = if attrs.is_empty() {
        &DEFAULT_PATH_ATTRS[..]
    } else {
        attrs
    };

    let attrs: String = attrs
        .iter()
        .map(|(key, value)| format!(" {}=\"{}\"", escape_attr(key), escape_attr(value)))
        .collect();
    format!("<path d=\"{path}\"{attrs} />")
}

/// Formats a `<linearGradient>` whose axis runs through the bounding box
/// center at `angle_deg`.
///
/// Stop offsets are percentages; colors use their CSS form.
#[must_use]
pub fn linear_gradient(id: &str, stops: &[ColorStop], angle_deg: f64) -> String {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let mut out = format!(
        "<linearGradient id=\"{}\" x1=\"{:.3}\" y1=\"{:.3}\" x2=\"{:.3}\" y2=\"{:.3}\" gradientUnits=\"objectBoundingBox\">\n",
        escape_attr(id),
        0.5 - cos * 0.5,
        0.5 - sin * 0.5,
        0.5 + cos * 0.5,
        0.5 + sin * 0.5,
    );
    for stop in stops {
        out.push_str(&format!(
            "  <stop offset=\"{}%\" stop-color=\"{}\" />\n",
            stop.offset, stop.color
        ));
    }
    out.push_str("</linearGradient>");
    out
}

/// Formats stacked thickness layers as a group of translated, faded paths,
/// bottom layer first so the top layer paints last.
#[must_use]
pub fn layered_path_group(layers: &[ThicknessLayer], attrs: &[(&str, &str)]) -> String {
    let mut out = String::from("<g>\n");
    for layer in layers.iter().rev() {
        out.push_str(&format!(
            "  <g transform=\"translate({:.2} {:.2})\" opacity=\"{}\">{}</g>\n",
            layer.offset.x,
            layer.offset.y,
            layer.opacity,
            path_element(&layer.path, attrs)
        ));
    }
    out.push_str("</g>");
    out
}

/// Renders a burst as a standalone SVG document.
///
/// Even ribbons are filled with a pink gradient, odd ones with flat pink, all
/// with a soft glow over a dark background.
#[must_use]
pub fn burst_svg(width: f64, height: f64, ribbons: &[BurstRibbon]) -> String {
    let mut out = svg_open(width, height);
    out.push_str(
        "  <defs>\n\
         \x20   <linearGradient id=\"ribbonGrad\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"100%\">\n\
         \x20     <stop offset=\"0%\" stop-color=\"#ff69b4\" />\n\
         \x20     <stop offset=\"50%\" stop-color=\"#da70d6\" />\n\
         \x20     <stop offset=\"100%\" stop-color=\"#ff1493\" />\n\
         \x20   </linearGradient>\n\
         \x20   <filter id=\"glow\">\n\
         \x20     <feGaussianBlur stdDeviation=\"3\" result=\"coloredBlur\" />\n\
         \x20     <feMerge>\n\
         \x20       <feMergeNode in=\"coloredBlur\" />\n\
         \x20       <feMergeNode in=\"SourceGraphic\" />\n\
         \x20     </feMerge>\n\
         \x20   </filter>\n\
         \x20 </defs>\n",
    );
    out.push_str(&format!(
        "  <rect width=\"100%\" height=\"100%\" fill=\"{BURST_BACKGROUND}\" />\n"
    ));

    for burst in ribbons {
        let fill = if burst.index % 2 == 0 {
            "url(#ribbonGrad)"
        } else {
            "#ff69b4"
        };
        let attrs = [
            ("fill", fill),
            ("fill-opacity", "0.8"),
            ("stroke", "#ffb6c1"),
            ("stroke-width", "1"),
            ("filter", "url(#glow)"),
        ];
        out.push_str(&format!(
            "  {}\n",
            path_element(&burst.ribbon.combined, &attrs)
        ));
    }

    out.push_str("</svg>");
    out
}

/// Renders a chrome badge tinted by a 24h price move.
///
/// The base color is shifted toward green or red, expanded into a metallic
/// ramp and drawn as a rounded rect with a specular sheen and an edge
/// highlight on top.
///
/// # Errors
///
/// Returns an error if `base_hex` is not a valid `#rrggbb` color.
pub fn metallic_ribbon_svg(
    width: f64,
    height: f64,
    base_hex: &str,
    percent_change: f64,
) -> Result<String> {
    let shifted = dynamic_shift(base_hex, percent_change)?;
    let ramp = metallic_gradient(&shifted.to_hex(), BADGE_INTENSITY)?;

    let mut out = svg_open(width, height);
    out.push_str("  <defs>\n");
    for gradient in [
        linear_gradient("ribbon-metal", &ramp, 90.0),
        linear_gradient("ribbon-specular", &specular_stops(), 75.0),
    ] {
        out.push_str(&gradient);
        out.push('\n');
    }
    out.push_str(
        "  <filter id=\"glow\" x=\"-20%\" y=\"-20%\" width=\"140%\" height=\"140%\">\n\
         \x20   <feGaussianBlur stdDeviation=\"3\" result=\"blur\" />\n\
         \x20   <feComposite in=\"SourceGraphic\" in2=\"blur\" operator=\"over\" />\n\
         \x20 </filter>\n\
         \x20 </defs>\n",
    );

    let (inner_w, inner_h) = ((width - 4.0).max(0.0), (height - 4.0).max(0.0));
    out.push_str(&format!(
        "  <rect x=\"2\" y=\"2\" width=\"{inner_w}\" height=\"{inner_h}\" rx=\"8\" fill=\"url(#ribbon-metal)\" filter=\"url(#glow)\" />\n"
    ));
    out.push_str(&format!(
        "  <rect x=\"2\" y=\"2\" width=\"{inner_w}\" height=\"{inner_h}\" rx=\"8\" fill=\"url(#ribbon-specular)\" style=\"mix-blend-mode: overlay;\" />\n"
    ));
    let (edge_w, edge_h) = ((width - 6.0).max(0.0), (height - 6.0).max(0.0));
    out.push_str(&format!(
        "  <rect x=\"3\" y=\"3\" width=\"{edge_w}\" height=\"{edge_h}\" rx=\"7\" fill=\"none\" stroke=\"rgba(255,255,255,0.4)\" stroke-width=\"1\" />\n"
    ));

    out.push_str("</svg>");
    Ok(out)
}

fn svg_open(width: f64, height: f64) -> String {
    format!(
        "<svg width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\" xmlns=\"http://www.w3.org/2000/svg\">\n"
    )
}
