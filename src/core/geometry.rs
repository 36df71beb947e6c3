use std::fmt::Write;

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in output coordinates; `(x, y)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        self.x + self.width * 0.5
    }

    #[must_use]
    pub fn center_y(self) -> f64 {
        self.y + self.height * 0.5
    }
}

/// Horizontal anchoring of a label relative to its `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelPlacement {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub anchor: TextAnchor,
}

impl LabelPlacement {
    #[must_use]
    pub fn new(x: f64, y: f64, text: impl Into<String>, anchor: TextAnchor) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            anchor,
        }
    }
}

/// Point in output coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point on a circle around `center` at `angle` radians, clockwise from 3 o'clock.
    #[must_use]
    pub fn on_circle(center: Point, radius: f64, angle: f64) -> Self {
        Self {
            x: center.x + radius * angle.cos(),
            y: center.y + radius * angle.sin(),
        }
    }

    /// True when both points print the same in path data.
    #[must_use]
    pub fn rounds_to(self, other: Point) -> bool {
        format_coordinate(self.x) == format_coordinate(other.x)
            && format_coordinate(self.y) == format_coordinate(other.y)
    }
}

/// Builds SVG path data restricted to `M`, `L`, `A` and `Z` commands.
///
/// Commands and arguments are space separated and coordinates are rounded to
/// two decimals, e.g. `M 10 20 L 30.5 40 Z`.
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: String,
}

impl PathBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: String::with_capacity(128),
        }
    }

    #[must_use]
    pub fn move_to(mut self, point: Point) -> Self {
        self.command('M');
        self.pair(point);
        self
    }

    #[must_use]
    pub fn line_to(mut self, point: Point) -> Self {
        self.command('L');
        self.pair(point);
        self
    }

    /// Elliptical arc with a zero x-axis rotation and equal radii.
    #[must_use]
    pub fn arc_to(mut self, radius: f64, large_arc: bool, sweep: bool, point: Point) -> Self {
        self.command('A');
        self.number(radius);
        self.number(radius);
        self.commands.push_str(" 0");
        self.flag(large_arc);
        self.flag(sweep);
        self.pair(point);
        self
    }

    #[must_use]
    pub fn close(mut self) -> Self {
        self.command('Z');
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn build(self) -> String {
        self.commands
    }

    fn command(&mut self, command: char) {
        if !self.commands.is_empty() {
            self.commands.push(' ');
        }
        self.commands.push(command);
    }

    fn pair(&mut self, point: Point) {
        self.number(point.x);
        self.number(point.y);
    }

    fn flag(&mut self, flag: bool) {
        self.commands.push_str(if flag { " 1" } else { " 0" });
    }

    fn number(&mut self, value: f64) {
        let _ = write!(self.commands, " {}", format_coordinate(value));
    }
}

/// Rounds to two decimals and prints without trailing zeros or negative zero.
#[must_use]
pub fn format_coordinate(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded}")
}
