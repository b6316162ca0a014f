// Copyright 2026 the Tasklane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gantt styling: user configuration and its fully-defaulted form.
//!
//! [`GanttStyle`] is what the configuration form hands over; any field may be unset.
//! [`GanttStyle::resolve`] merges it with the defaults into a new [`ResolvedGanttStyle`] and
//! leaves the input untouched, so one configuration can be reused across render cycles.

use core::fmt;

use peniko::Color;
use peniko::color::palette::css;
use peniko::color::{Srgb, parse_color};
use serde::{Deserialize, Serialize, Serializer};
use tracing::warn;

/// Default bar corner radius.
pub const DEFAULT_BAR_CORNER_RADIUS: f64 = 1.0;
/// Default bar height.
pub const DEFAULT_BAR_HEIGHT: f64 = 24.0;
/// Default label font size.
pub const DEFAULT_FONT_SIZE: f64 = 10.0;
/// Default gridline width.
pub const DEFAULT_GRID_LINE_WIDTH: f64 = 1.0;
/// Default track height.
pub const DEFAULT_TRACK_HEIGHT: f64 = 25.0;

// Colors written by CSS keyword rather than hex.
const NAMED_COLORS: [(&str, Color); 2] = [("white", css::WHITE), ("black", css::BLACK)];

/// A paint value as understood by the chart engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    /// Use the surrounding page's value.
    Inherit,
    /// A concrete sRGB color.
    Color(Color),
}

impl Paint {
    /// Parses `inherit` or any CSS color.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("inherit") {
            return Some(Self::Inherit);
        }
        parse_color(s)
            .ok()
            .map(|c| Self::Color(c.to_alpha_color::<Srgb>()))
    }

    /// CSS text for this paint: `inherit`, a color keyword such as `white`, `#rrggbb`, or
    /// `rgba(...)` when translucent.
    pub fn to_css(&self) -> String {
        match self {
            Self::Inherit => "inherit".to_owned(),
            Self::Color(color) => {
                let rgba = color.to_rgba8();
                let named = NAMED_COLORS.iter().find(|(_, c)| {
                    let c = c.to_rgba8();
                    (c.r, c.g, c.b, c.a) == (rgba.r, rgba.g, rgba.b, rgba.a)
                });
                if let Some((name, _)) = named {
                    (*name).to_owned()
                } else if rgba.a == 255 {
                    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
                } else {
                    format!(
                        "rgba({}, {}, {}, {})",
                        rgba.r,
                        rgba.g,
                        rgba.b,
                        f64::from(rgba.a) / 255.0
                    )
                }
            }
        }
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl Serialize for Paint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

/// User-supplied Gantt styling. Unset fields take the defaults listed on
/// [`ResolvedGanttStyle`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GanttStyle {
    /// Bar corner radius.
    pub bar_corner_radius: Option<f64>,
    /// Bar height.
    pub bar_height: Option<f64>,
    /// Label font size.
    pub font_size: Option<f64>,
    /// Label font color (`inherit` or a CSS color).
    pub font_color: Option<String>,
    /// Horizontal gridline color.
    pub grid_line_color: Option<String>,
    /// Horizontal gridline width.
    pub grid_line_width: Option<f64>,
    /// Fill of even tracks.
    pub grid_track_color: Option<String>,
    /// Fill of odd tracks.
    pub grid_alternate_track_color: Option<String>,
    /// Height of one task track.
    pub track_height: Option<f64>,
    /// Let the chart engine reorder tasks.
    pub sort_tasks: Option<bool>,
}

/// Gantt styling with every default applied.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedGanttStyle {
    /// Bar corner radius (default 1).
    pub bar_corner_radius: f64,
    /// Bar height (default 24).
    pub bar_height: f64,
    /// Label font size (default 10).
    pub font_size: f64,
    /// Label font color (default `inherit`).
    pub font_color: Paint,
    /// Horizontal gridline color; no default, the chart engine decides.
    pub grid_line_color: Option<Paint>,
    /// Horizontal gridline width (default 1).
    pub grid_line_width: f64,
    /// Fill of even tracks (default white).
    pub grid_track_color: Paint,
    /// Fill of odd tracks (default white).
    pub grid_alternate_track_color: Paint,
    /// Height of one task track (default 25).
    pub track_height: f64,
    /// Task sorting; no default, the chart engine decides.
    pub sort_tasks: Option<bool>,
}

impl Default for ResolvedGanttStyle {
    fn default() -> Self {
        Self {
            bar_corner_radius: DEFAULT_BAR_CORNER_RADIUS,
            bar_height: DEFAULT_BAR_HEIGHT,
            font_size: DEFAULT_FONT_SIZE,
            font_color: Paint::Inherit,
            grid_line_color: None,
            grid_line_width: DEFAULT_GRID_LINE_WIDTH,
            grid_track_color: css::WHITE.into(),
            grid_alternate_track_color: css::WHITE.into(),
            track_height: DEFAULT_TRACK_HEIGHT,
            sort_tasks: None,
        }
    }
}

impl GanttStyle {
    /// Merges this configuration with the defaults.
    ///
    /// Sizes must be finite; heights and font size must be positive, radius and line width
    /// non-negative. Colors must be `inherit` or parse as CSS colors. Anything else counts as
    /// unset.
    pub fn resolve(&self) -> ResolvedGanttStyle {
        let d = ResolvedGanttStyle::default();
        ResolvedGanttStyle {
            bar_corner_radius: size_or(
                "barCornerRadius",
                self.bar_corner_radius,
                0.0,
                d.bar_corner_radius,
            ),
            bar_height: size_or("barHeight", self.bar_height, f64::MIN_POSITIVE, d.bar_height),
            font_size: size_or("fontSize", self.font_size, f64::MIN_POSITIVE, d.font_size),
            font_color: paint("fontColor", self.font_color.as_deref()).unwrap_or(d.font_color),
            grid_line_color: paint("gridLineColor", self.grid_line_color.as_deref()),
            grid_line_width: size_or(
                "gridLineWidth",
                self.grid_line_width,
                0.0,
                d.grid_line_width,
            ),
            grid_track_color: paint("gridTrackColor", self.grid_track_color.as_deref())
                .unwrap_or(d.grid_track_color),
            grid_alternate_track_color: paint(
                "gridAlternateTrackColor",
                self.grid_alternate_track_color.as_deref(),
            )
            .unwrap_or(d.grid_alternate_track_color),
            track_height: size_or(
                "trackHeight",
                self.track_height,
                f64::MIN_POSITIVE,
                d.track_height,
            ),
            sort_tasks: self.sort_tasks,
        }
    }
}

fn size_or(name: &str, value: Option<f64>, min: f64, default: f64) -> f64 {
    match value {
        None => default,
        Some(v) if v.is_finite() && v >= min => v,
        Some(v) => {
            warn!(option = name, value = v, default, "ignoring out-of-range style value");
            default
        }
    }
}

fn paint(name: &str, value: Option<&str>) -> Option<Paint> {
    let value = value.map(str::trim).filter(|s| !s.is_empty())?;
    let parsed = Paint::parse(value);
    if parsed.is_none() {
        warn!(option = name, value, "ignoring unparseable color");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_resolves_to_documented_defaults() {
        let r = GanttStyle::default().resolve();
        assert_eq!(r.bar_corner_radius, 1.0);
        assert_eq!(r.bar_height, 24.0);
        assert_eq!(r.font_size, 10.0);
        assert_eq!(r.font_color.to_css(), "inherit");
        assert_eq!(r.grid_line_width, 1.0);
        assert_eq!(r.grid_track_color.to_css(), "white");
        assert_eq!(r.grid_alternate_track_color.to_css(), "white");
        assert_eq!(r.track_height, 25.0);
        assert_eq!(r.grid_line_color, None);
        assert_eq!(r.sort_tasks, None);
    }

    #[test]
    fn set_values_win_and_input_is_untouched() {
        let style = GanttStyle {
            track_height: Some(40.0),
            bar_corner_radius: Some(0.0),
            grid_alternate_track_color: Some("#eeeeee".to_owned()),
            grid_line_color: Some("rebeccapurple".to_owned()),
            sort_tasks: Some(false),
            ..GanttStyle::default()
        };
        let before = style.clone();
        let r = style.resolve();
        assert_eq!(style, before);
        assert_eq!(r.track_height, 40.0);
        assert_eq!(r.bar_corner_radius, 0.0);
        assert_eq!(r.grid_alternate_track_color.to_css(), "#eeeeee");
        assert_eq!(r.grid_line_color.map(|p| p.to_css()).as_deref(), Some("#663399"));
        assert_eq!(r.sort_tasks, Some(false));
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let style = GanttStyle {
            track_height: Some(0.0),
            bar_height: Some(f64::NAN),
            grid_line_width: Some(-2.0),
            font_color: Some("not a color".to_owned()),
            grid_track_color: Some("  ".to_owned()),
            ..GanttStyle::default()
        };
        let r = style.resolve();
        assert_eq!(r, ResolvedGanttStyle::default());
    }

    #[test]
    fn deserializes_camel_case_config() {
        let style: GanttStyle =
            serde_json::from_str(r#"{"trackHeight": 30, "fontColor": "INHERIT"}"#).unwrap();
        let r = style.resolve();
        assert_eq!(r.track_height, 30.0);
        assert_eq!(r.font_color, Paint::Inherit);
    }

    #[test]
    fn translucent_colors_keep_alpha() {
        let p = Paint::parse("rgba(0, 0, 0, 0.5)").unwrap();
        assert!(p.to_css().starts_with("rgba(0, 0, 0, 0."), "{p}");
        let opaque = Paint::parse("rgb(0, 0, 0)").unwrap();
        assert_eq!(opaque.to_css(), "black");
        let grey = Paint::parse("rgb(16, 16, 16)").unwrap();
        assert_eq!(grey.to_css(), "#101010");
    }
}
