//! Pie chart drawn on a Braille canvas, with elbowed leader lines and
//! radial labels outside the pie

use codecracker_core::{
    arc_at_angle, palette_index, pie_arcs, ChartSlice, LabelLayout, PieArc, PieGeometry, Point,
    TextAnchor, LABEL_RADIUS_FACTOR, PALETTE_SIZE,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Widget,
    },
};
use unicode_width::UnicodeWidthStr;

use crate::theme::palette;

/// Outer radius of the pie in chart units
pub const OUTER_RADIUS: f64 = 120.0;

/// Braille dots per terminal cell
const DOTS_PER_CELL_X: u32 = 2;
const DOTS_PER_CELL_Y: u32 = 4;

/// Where everything goes for one render of the chart.
///
/// Coordinates are chart units in screen orientation (y down). One Braille
/// dot is `scale` units wide and tall, which keeps the pie round.
#[derive(Debug, Clone, PartialEq)]
pub struct PieLayout {
    /// Chart units per Braille dot
    pub scale: f64,
    /// Canvas extent in chart units
    pub width: f64,
    pub height: f64,
    pub geometry: PieGeometry,
    pub arcs: Vec<PieArc>,
    pub labels: Vec<LabelLayout>,
    dots_x: u32,
    dots_y: u32,
}

impl PieLayout {
    /// Fit the pie and its labels into `area`.
    ///
    /// Returns `None` when there is nothing to draw or no room to draw it.
    pub fn compute(area: Rect, slices: &[ChartSlice]) -> Option<Self> {
        if slices.is_empty() || area.width < 4 || area.height < 2 {
            return None;
        }

        let dots_x = u32::from(area.width) * DOTS_PER_CELL_X;
        let dots_y = u32::from(area.height) * DOTS_PER_CELL_Y;
        let reach = OUTER_RADIUS * LABEL_RADIUS_FACTOR;

        // Leave one text row above and below the label ring
        let usable_y = dots_y.saturating_sub(2 * DOTS_PER_CELL_Y).max(1);
        let mut scale = 2.0 * reach / f64::from(usable_y);

        // Widest label must fit beside the ring on both sides
        let label_dots = slices
            .iter()
            .map(|s| s.label_text().width() as u32 * DOTS_PER_CELL_X)
            .max()
            .unwrap_or(0);
        let usable_x = dots_x.saturating_sub(2 * label_dots);
        if usable_x > 0 {
            scale = scale.max(2.0 * reach / f64::from(usable_x));
        } else {
            scale = scale.max(2.0 * reach / f64::from(dots_x));
        }

        let width = f64::from(dots_x) * scale;
        let height = f64::from(dots_y) * scale;
        let geometry = PieGeometry::new(Point::new(width / 2.0, height / 2.0), 0.0, OUTER_RADIUS);
        let arcs = pie_arcs(slices);
        let labels = arcs
            .iter()
            .map(|arc| geometry.label_layout(arc.mid_angle))
            .collect();

        Some(Self {
            scale,
            width,
            height,
            geometry,
            arcs,
            labels,
            dots_x,
            dots_y,
        })
    }

    /// Canvas coordinates (y up) for a chart point
    pub fn to_canvas(&self, point: Point) -> (f64, f64) {
        (point.x, self.height - point.y)
    }

    /// Chart units taken by `text` on one row
    pub fn text_width(&self, text: &str) -> f64 {
        text.width() as f64 * f64::from(DOTS_PER_CELL_X) * self.scale
    }

    /// Canvas position where the label text starts, honoring its anchor
    pub fn label_origin(&self, layout: &LabelLayout, text: &str) -> (f64, f64) {
        let x = match layout.anchor {
            TextAnchor::Start => layout.label.x,
            TextAnchor::End => layout.label.x - self.text_width(text),
        };
        let (_, y) = self.to_canvas(layout.label);
        (x.clamp(0.0, self.width), y.clamp(0.0, self.height))
    }

    /// Dot centers inside the pie, bucketed by palette slot
    pub fn fill_points(&self) -> Vec<Vec<(f64, f64)>> {
        let mut buckets = vec![Vec::new(); PALETTE_SIZE];
        for j in 0..self.dots_y {
            for i in 0..self.dots_x {
                let point = Point::new(
                    (f64::from(i) + 0.5) * self.scale,
                    (f64::from(j) + 0.5) * self.scale,
                );
                if !self.geometry.contains(point) {
                    continue;
                }
                let angle = self.geometry.angle_of(point);
                if let Some(index) = arc_at_angle(&self.arcs, angle) {
                    buckets[palette_index(index)].push(self.to_canvas(point));
                }
            }
        }
        buckets
    }
}

/// The language pie with radial labels
pub struct PieChart<'a> {
    slices: &'a [ChartSlice],
    selected: Option<usize>,
}

impl<'a> PieChart<'a> {
    pub fn new(slices: &'a [ChartSlice]) -> Self {
        Self {
            slices,
            selected: None,
        }
    }

    /// Emphasize one slice's label
    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for PieChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(layout) = PieLayout::compute(area, self.slices) else {
            return;
        };

        let fill = layout.fill_points();
        let texts: Vec<String> = self.slices.iter().map(ChartSlice::label_text).collect();

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .background_color(palette::CARD_BG)
            .x_bounds([0.0, layout.width])
            .y_bounds([0.0, layout.height])
            .paint(|ctx| {
                for (slot, coords) in fill.iter().enumerate() {
                    if !coords.is_empty() {
                        ctx.draw(&Points {
                            coords,
                            color: palette::CHART_PALETTE[slot],
                        });
                    }
                }

                ctx.layer();

                for (index, label) in layout.labels.iter().enumerate() {
                    let color = palette::slice_color(index);
                    let (rx, ry) = layout.to_canvas(label.rim);
                    let (kx, ky) = layout.to_canvas(label.knee);
                    let (lx, ly) = layout.to_canvas(label.label);
                    ctx.draw(&CanvasLine {
                        x1: rx,
                        y1: ry,
                        x2: kx,
                        y2: ky,
                        color,
                    });
                    ctx.draw(&CanvasLine {
                        x1: kx,
                        y1: ky,
                        x2: lx,
                        y2: ly,
                        color,
                    });
                }

                for (index, (label, text)) in layout.labels.iter().zip(&texts).enumerate() {
                    let mut style = Style::default().fg(palette::slice_color(index));
                    if self.selected == Some(index) {
                        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
                    }
                    let (x, y) = layout.label_origin(label, text);
                    ctx.print(x, y, Span::styled(text.clone(), style));
                }
            });

        canvas.render(area, buf);
    }
}
