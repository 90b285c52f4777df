//! Pie chart model: slices, arcs, and radial label geometry
//!
//! Everything here is renderer-independent. Coordinates are screen
//! coordinates (y grows downward); angles are radians with 0 pointing right.
//! A point at angle `a` on a circle of radius `r` is
//! `center + r * (cos(-a), sin(-a))`, so positive angles sweep upward.

use std::f64::consts::TAU;

use serde::Serialize;

use crate::types::{format_number, LanguageStats};

/// Number of colors in the chart palette
pub const PALETTE_SIZE: usize = 10;

/// Slice colors as hex RGB, assigned by position
pub const CHART_PALETTE_HEX: [&str; PALETTE_SIZE] = [
    "#2196F3", // Blue
    "#4CAF50", // Green
    "#FFC107", // Amber
    "#9C27B0", // Purple
    "#F44336", // Red
    "#00BCD4", // Cyan
    "#FF9800", // Orange
    "#795548", // Brown
    "#607D8B", // Blue Grey
    "#E91E63", // Pink
];

/// Distance from the rim to the leader line's elbow
pub const LEADER_LINE_OFFSET: f64 = 10.0;

/// Label anchor distance as a multiple of the outer radius
pub const LABEL_RADIUS_FACTOR: f64 = 1.2;

/// Palette slot for the slice at `index` (wraps around)
pub fn palette_index(index: usize) -> usize {
    index % PALETTE_SIZE
}

// ─────────────────────────────────────────────────────────────────────────────
// Slices
// ─────────────────────────────────────────────────────────────────────────────

/// One wedge of the language pie
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub name: String,
    /// Solved count, always > 0
    pub value: f64,
    /// Share of the total, in 0.0..=1.0
    pub percent: f64,
}

impl ChartSlice {
    /// Percentage with one decimal place ("66.7"), halves rounded up
    pub fn percent_label(&self) -> String {
        format!("{:.1}", (self.percent * 1000.0).round() / 10.0)
    }

    /// Text drawn next to the slice: `"Python (80, 66.7%)"`
    pub fn label_text(&self) -> String {
        format!(
            "{} ({}, {}%)",
            self.name,
            format_number(self.value),
            self.percent_label()
        )
    }

    /// Hover/legend text: `"80 problems (66.7%)"`
    pub fn tooltip_text(&self) -> String {
        format!(
            "{} problems ({}%)",
            format_number(self.value),
            self.percent_label()
        )
    }
}

/// Derive chart slices from per-language counts.
///
/// Languages with a non-positive (or non-numeric) count are dropped, and
/// percents are computed over the remaining total, so they sum to 1.0.
pub fn build_slices(stats: &LanguageStats) -> Vec<ChartSlice> {
    let included: Vec<(&str, f64)> = stats
        .iter()
        .filter(|entry| entry.value > 0.0)
        .map(|entry| (entry.name.as_str(), entry.value))
        .collect();

    let total: f64 = included.iter().map(|(_, value)| value).sum();
    if !total.is_finite() || total <= 0.0 {
        return Vec::new();
    }

    included
        .into_iter()
        .map(|(name, value)| ChartSlice {
            name: name.to_string(),
            value,
            percent: value / total,
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Arcs
// ─────────────────────────────────────────────────────────────────────────────

/// Angular extent of one slice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieArc {
    pub start_angle: f64,
    pub end_angle: f64,
    pub mid_angle: f64,
}

impl PieArc {
    /// Whether a normalized angle falls inside this arc
    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.start_angle && angle < self.end_angle
    }
}

/// Lay slices out consecutively from angle 0, each sweeping `percent * 2π`
pub fn pie_arcs(slices: &[ChartSlice]) -> Vec<PieArc> {
    let mut start = 0.0;
    slices
        .iter()
        .map(|slice| {
            let end = start + slice.percent * TAU;
            let arc = PieArc {
                start_angle: start,
                end_angle: end,
                mid_angle: (start + end) / 2.0,
            };
            start = end;
            arc
        })
        .collect()
}

/// Normalize an angle into `0..2π`
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle % TAU;
    if a < 0.0 {
        a + TAU
    } else {
        a
    }
}

/// Index of the arc covering `angle`.
///
/// Angles past the last arc's end (float rounding near 2π) belong to the
/// last arc.
pub fn arc_at_angle(arcs: &[PieArc], angle: f64) -> Option<usize> {
    let angle = normalize_angle(angle);
    arcs.iter()
        .position(|arc| arc.contains(angle))
        .or_else(|| arcs.len().checked_sub(1))
}

// ─────────────────────────────────────────────────────────────────────────────
// Label geometry
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which end of the label text sits on the anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    /// Text starts at the point and extends right
    Start,
    /// Text ends at the point and extends left
    End,
}

/// Leader line and label placement for one slice
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabelLayout {
    /// Where the leader line leaves the pie
    pub rim: Point,
    /// Elbow of the leader line
    pub knee: Point,
    /// Label anchor point
    pub label: Point,
    pub anchor: TextAnchor,
}

/// Center and radii of a drawn pie
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieGeometry {
    pub center: Point,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl PieGeometry {
    pub fn new(center: Point, inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            center,
            inner_radius,
            outer_radius,
        }
    }

    /// Point at `radius` from the center along `angle`
    pub fn point_at(&self, radius: f64, angle: f64) -> Point {
        Point {
            x: self.center.x + radius * (-angle).cos(),
            y: self.center.y + radius * (-angle).sin(),
        }
    }

    /// Angle of a screen point around the center, normalized to `0..2π`
    pub fn angle_of(&self, point: Point) -> f64 {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        normalize_angle((-dy).atan2(dx))
    }

    /// Whether a screen point lies on the ring between the two radii
    pub fn contains(&self, point: Point) -> bool {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        let dist = (dx * dx + dy * dy).sqrt();
        dist >= self.inner_radius && dist <= self.outer_radius
    }

    /// Elbowed leader line and text anchor for a slice's mid-angle.
    ///
    /// Labels right of center are left-anchored and labels on or left of
    /// center are right-anchored, so text never runs back over the pie.
    pub fn label_layout(&self, mid_angle: f64) -> LabelLayout {
        let rim = self.point_at(self.outer_radius, mid_angle);
        let knee = self.point_at(self.outer_radius + LEADER_LINE_OFFSET, mid_angle);
        let label = self.point_at(self.outer_radius * LABEL_RADIUS_FACTOR, mid_angle);
        let anchor = if label.x > self.center.x {
            TextAnchor::Start
        } else {
            TextAnchor::End
        };

        LabelLayout {
            rim,
            knee,
            label,
            anchor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-9;

    fn stats(entries: &[(&str, f64)]) -> LanguageStats {
        entries.iter().map(|(n, v)| (*n, *v)).collect()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_build_slices_two_languages() {
        let slices = build_slices(&stats(&[("Python", 80.0), ("Java", 40.0)]));

        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].percent_label(), "66.7");
        assert_eq!(slices[1].percent_label(), "33.3");
        assert_eq!(slices[0].label_text(), "Python (80, 66.7%)");
        assert_eq!(slices[1].label_text(), "Java (40, 33.3%)");
    }

    #[test]
    fn test_build_slices_excludes_non_positive_values() {
        let slices = build_slices(&stats(&[
            ("Rust", 10.0),
            ("Go", 0.0),
            ("Perl", -2.0),
            ("Bad", f64::NAN),
            ("C", 30.0),
        ]));

        let names: Vec<&str> = slices.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Rust", "C"]);
        assert!(slices.iter().all(|s| s.value > 0.0));
    }

    #[test]
    fn test_build_slices_percents_sum_to_one() {
        let slices = build_slices(&stats(&[
            ("A", 3.0),
            ("B", 7.0),
            ("C", 11.0),
            ("D", 13.0),
            ("E", 1.0),
        ]));

        let sum: f64 = slices.iter().map(|s| s.percent).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_build_slices_empty_when_nothing_positive() {
        assert!(build_slices(&stats(&[("Go", 0.0)])).is_empty());
        assert!(build_slices(&LanguageStats::default()).is_empty());
    }

    #[test]
    fn test_percent_label_rounds_half_up() {
        let slices = build_slices(&stats(&[("A", 1.0), ("B", 15.0)]));

        assert_eq!(slices[0].label_text(), "A (1, 6.3%)");
        assert_eq!(slices[1].tooltip_text(), "15 problems (93.8%)");
    }

    #[test]
    fn test_tooltip_text() {
        let slices = build_slices(&stats(&[("Python", 80.0), ("Java", 40.0)]));
        assert_eq!(slices[0].tooltip_text(), "80 problems (66.7%)");
    }

    #[test]
    fn test_palette_wraps() {
        assert_eq!(palette_index(0), 0);
        assert_eq!(palette_index(9), 9);
        assert_eq!(palette_index(10), 0);
        assert_eq!(palette_index(23), 3);
    }

    #[test]
    fn test_pie_arcs_cover_full_circle() {
        let slices = build_slices(&stats(&[("A", 1.0), ("B", 1.0), ("C", 2.0)]));
        let arcs = pie_arcs(&slices);

        assert!(approx(arcs[0].start_angle, 0.0));
        assert!(approx(arcs[0].end_angle, FRAC_PI_2));
        assert!(approx(arcs[1].mid_angle, 3.0 * PI / 4.0));
        assert!(approx(arcs[2].end_angle, TAU));
    }

    #[test]
    fn test_arc_at_angle() {
        let slices = build_slices(&stats(&[("A", 1.0), ("B", 1.0)]));
        let arcs = pie_arcs(&slices);

        assert_eq!(arc_at_angle(&arcs, 0.1), Some(0));
        assert_eq!(arc_at_angle(&arcs, PI + 0.1), Some(1));
        assert_eq!(arc_at_angle(&arcs, -0.1), Some(1));
        assert_eq!(arc_at_angle(&[], 1.0), None);
    }

    #[test]
    fn test_label_layout_right_side() {
        let pie = PieGeometry::new(Point::new(100.0, 100.0), 0.0, 50.0);
        let layout = pie.label_layout(0.0);

        assert!(approx(layout.rim.x, 150.0));
        assert!(approx(layout.rim.y, 100.0));
        assert!(approx(layout.knee.x, 160.0));
        assert!(approx(layout.label.x, 160.0));
        assert_eq!(layout.anchor, TextAnchor::Start);
    }

    #[test]
    fn test_label_layout_left_side_is_end_anchored() {
        let pie = PieGeometry::new(Point::new(100.0, 100.0), 0.0, 50.0);
        let layout = pie.label_layout(PI);

        assert!(approx(layout.rim.x, 50.0));
        assert!(approx(layout.label.x, 40.0));
        assert_eq!(layout.anchor, TextAnchor::End);
    }

    #[test]
    fn test_label_layout_positive_angle_points_up() {
        let pie = PieGeometry::new(Point::new(0.0, 0.0), 0.0, 100.0);
        let layout = pie.label_layout(FRAC_PI_2);

        assert!(approx(layout.rim.y, -100.0));
        assert!(approx(layout.knee.y, -110.0));
        assert!(approx(layout.label.y, -120.0));
        assert!(approx(layout.label.x, 0.0));
    }

    #[test]
    fn test_label_anchor_matches_label_side() {
        let pie = PieGeometry::new(Point::new(40.0, 30.0), 0.0, 20.0);
        for step in 0..72 {
            let angle = step as f64 * TAU / 72.0;
            let layout = pie.label_layout(angle);
            let expected = if layout.label.x > pie.center.x {
                TextAnchor::Start
            } else {
                TextAnchor::End
            };
            assert_eq!(layout.anchor, expected, "angle {}", angle);
        }
    }

    #[test]
    fn test_angle_of_inverts_point_at() {
        let pie = PieGeometry::new(Point::new(10.0, 10.0), 0.0, 5.0);
        for angle in [0.3, 1.7, 3.5, 5.9] {
            let p = pie.point_at(4.0, angle);
            assert!(approx(pie.angle_of(p), angle));
        }
    }

    #[test]
    fn test_contains_respects_inner_radius() {
        let pie = PieGeometry::new(Point::new(0.0, 0.0), 2.0, 5.0);
        assert!(!pie.contains(Point::new(1.0, 0.0)));
        assert!(pie.contains(Point::new(3.0, 0.0)));
        assert!(!pie.contains(Point::new(6.0, 0.0)));
    }
}
