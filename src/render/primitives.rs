use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::core::{LabelPlacement, Point, Rect};
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serialized as a CSS hex string (`#rrggbb` or `#rrggbbaa`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(raw: &str) -> ChartResult<Self> {
        let digits = raw.trim().trim_start_matches('#');
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ChartError::InvalidConfig(format!(
                "invalid hex color `{raw}`"
            )));
        }
        let channel = |slice: &str| {
            u8::from_str_radix(slice, 16)
                .map_err(|_| ChartError::InvalidConfig(format!("invalid hex color `{raw}`")))
        };

        let (red, green, blue, alpha) = match digits.len() {
            3 => {
                let expand = |i: usize| channel(&digits[i..=i].repeat(2));
                (expand(0)?, expand(1)?, expand(2)?, 255)
            }
            6 => (
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
                255,
            ),
            8 => (
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
                channel(&digits[6..8])?,
            ),
            _ => {
                return Err(ChartError::InvalidConfig(format!(
                    "invalid hex color `{raw}`"
                )));
            }
        };

        Ok(Self::rgb8(red, green, blue).with_alpha(f64::from(alpha) / 255.0))
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        let byte = |channel: f64| (channel.clamp(0.0, 1.0) * 255.0).round() as u8;
        let mut hex = format!(
            "#{:02x}{:02x}{:02x}",
            byte(self.red),
            byte(self.green),
            byte(self.blue)
        );
        if self.alpha < 1.0 {
            let _ = write!(hex, "{:02x}", byte(self.alpha));
        }
        hex
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Color::from_hex(&raw)
    }
}

/// Segment palette cycled by donut charts.
pub const DEFAULT_PALETTE: [Color; 8] = [
    Color::rgb8(0x3b, 0x82, 0xf6),
    Color::rgb8(0x10, 0xb9, 0x81),
    Color::rgb8(0xf5, 0x9e, 0x0b),
    Color::rgb8(0xef, 0x44, 0x44),
    Color::rgb8(0x8b, 0x5c, 0xf6),
    Color::rgb8(0xec, 0x48, 0x99),
    Color::rgb8(0x06, 0xb6, 0xd4),
    Color::rgb8(0x84, 0xcc, 0x16),
];

pub const DEFAULT_SERIES_COLOR: Color = DEFAULT_PALETTE[0];
pub const GRID_COLOR: Color = Color::rgba(0.898, 0.906, 0.922, 0.5);
pub const LABEL_COLOR: Color = Color::rgb8(0x6b, 0x72, 0x80);

fn ensure_finite(values: &[f64], what: &str) -> ChartResult<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "{what} coordinates must be finite"
        )))
    }
}

/// Draw command for one line segment, used for gridlines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite(&[self.x1, self.y1, self.x2, self.y2], "line")?;
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Filled rectangle, used for bars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub rect: Rect,
    pub fill: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(rect: Rect, fill: Color) -> Self {
        Self { rect, fill }
    }

    pub fn validate(self) -> ChartResult<()> {
        let Rect {
            x,
            y,
            width,
            height,
        } = self.rect;
        ensure_finite(&[x, y, width, height], "rect")?;
        if width < 0.0 || height < 0.0 {
            return Err(ChartError::InvalidData(
                "rect size must be >= 0".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// SVG path data with optional fill and stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub d: String,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
}

impl PathPrimitive {
    #[must_use]
    pub fn filled(d: impl Into<String>, fill: Color) -> Self {
        Self {
            d: d.into(),
            fill: Some(fill),
            stroke: None,
            stroke_width: 0.0,
        }
    }

    #[must_use]
    pub fn stroked(d: impl Into<String>, stroke: Color, stroke_width: f64) -> Self {
        Self {
            d: d.into(),
            fill: None,
            stroke: Some(stroke),
            stroke_width,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.d.starts_with('M') {
            return Err(ChartError::InvalidData(
                "path data must start with a move command".to_owned(),
            ));
        }
        if self.d.contains("NaN") || self.d.contains("inf") {
            return Err(ChartError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        if let Some(stroke) = self.stroke {
            if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
                return Err(ChartError::InvalidData(
                    "path stroke width must be finite and > 0".to_owned(),
                ));
            }
            stroke.validate()?;
        }
        match self.fill {
            Some(fill) => fill.validate(),
            None => Ok(()),
        }
    }
}

/// Circle marker. Transparent fills are hit targets for host-side hover handling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub center: Point,
    pub radius: f64,
    pub fill: Color,
}

impl CirclePrimitive {
    pub fn validate(self) -> ChartResult<()> {
        ensure_finite(&[self.center.x, self.center.y], "circle")?;
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Draw command for one label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub label: LabelPlacement,
    pub font_size_px: f64,
    pub color: Color,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(label: LabelPlacement, font_size_px: f64, color: Color) -> Self {
        Self {
            label,
            font_size_px,
            color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.label.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        ensure_finite(&[self.label.x, self.label.y], "text")?;
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_parse_and_print() {
        assert_eq!(Color::from_hex("#3b82f6").expect("hex"), DEFAULT_PALETTE[0]);
        assert_eq!(Color::from_hex("fff").expect("short hex"), Color::rgb8(255, 255, 255));
        assert_eq!(DEFAULT_PALETTE[1].to_hex(), "#10b981");
        assert_eq!(
            Color::from_hex("#00000080").expect("alpha hex").to_hex(),
            "#00000080"
        );
    }

    #[test]
    fn malformed_hex_is_a_config_error() {
        for raw in ["", "#12", "#gggggg", "#éé", "#1234567"] {
            let err = Color::from_hex(raw).expect_err("malformed");
            assert!(format!("{err}").contains("invalid hex color"));
        }
    }

    #[test]
    fn path_validation_requires_move_and_finite_numbers() {
        assert!(PathPrimitive::filled("M 0 0 L 1 1 Z", DEFAULT_SERIES_COLOR).validate().is_ok());
        assert!(PathPrimitive::filled("L 1 1", DEFAULT_SERIES_COLOR).validate().is_err());
        assert!(PathPrimitive::filled("M NaN 0", DEFAULT_SERIES_COLOR).validate().is_err());
        assert!(PathPrimitive::stroked("M 0 0", DEFAULT_SERIES_COLOR, 0.0).validate().is_err());
    }
}
