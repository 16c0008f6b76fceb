//! Radar chart widget: one axis per theme, scores joined into a polygon.

use std::f64::consts::{FRAC_PI_2, TAU};

use quiz::{ChartDomain, ThemeScore};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Line as TextLine,
    widgets::{
        Block, Widget,
        canvas::{Canvas, Circle, Context, Line, Points},
    },
};

/// Distance of the axis labels from the center, relative to the outer ring.
const LABEL_RADIUS: f64 = 1.15;

/// Canvas units kept free around the outer ring on the short side.
const MARGIN: f64 = 1.3;

/// Concentric copies of the score polygon used to shade its inside.
const FILL_STEPS: u32 = 6;

/// Rings drawn when the domain has too many steps to draw one per step.
const DEFAULT_RINGS: u32 = 4;

/// A radar (polar) chart of per-theme scores.
///
/// Every value is scaled into the chart's [`ChartDomain`], so a score equal to
/// `domain.max` touches the outer ring.
#[derive(Debug, Clone)]
pub struct RadarChart<'a> {
    data: &'a [ThemeScore],
    domain: ChartDomain,
    block: Option<Block<'a>>,
    series: Option<&'a str>,
    color: Color,
    grid_color: Color,
    label_color: Color,
}

impl<'a> RadarChart<'a> {
    pub fn new(data: &'a [ThemeScore], domain: ChartDomain) -> Self {
        Self {
            data,
            domain,
            block: None,
            series: None,
            color: Color::Rgb(0x88, 0x84, 0xd8),
            grid_color: Color::DarkGray,
            label_color: Color::White,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Name of the plotted series, printed in the top-left corner.
    pub fn series(mut self, name: &'a str) -> Self {
        self.series = Some(name);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn grid_color(mut self, color: Color) -> Self {
        self.grid_color = color;
        self
    }

    pub fn label_color(mut self, color: Color) -> Self {
        self.label_color = color;
        self
    }

    /// Number of grid rings and the domain value each ring stands for.
    fn rings(&self) -> Vec<(f64, u32)> {
        let steps = self.domain.steps();
        if steps == 0 {
            return vec![(1.0, self.domain.max)];
        }
        let count = if steps <= 8 { steps } else { DEFAULT_RINGS };
        (1..=count)
            .map(|ring| {
                let fraction = f64::from(ring) / f64::from(count);
                let value = self.domain.min + (f64::from(steps) * fraction).round() as u32;
                (fraction, value)
            })
            .collect()
    }

    fn paint(&self, ctx: &mut Context<'_>, x_bounds: [f64; 2], y_bounds: [f64; 2], width: u16) {
        let count = self.data.len();
        let grid = self.grid_color;

        // Grid rings, then one axis per theme.
        for (fraction, _) in self.rings() {
            if count >= 3 {
                draw_polygon(ctx, &polygon(count, |_| fraction), grid);
            } else {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: fraction,
                    color: grid,
                });
            }
        }
        for idx in 0..count {
            let (x, y) = axis_point(idx, count, 1.0);
            ctx.draw(&Line::new(0.0, 0.0, x, y, grid));
        }
        ctx.layer();

        // Shaded inside, outline and vertices of the score polygon.
        let fractions: Vec<f64> = self
            .data
            .iter()
            .map(|d| self.domain.fraction(d.score))
            .collect();
        for step in 1..FILL_STEPS {
            let scale = f64::from(step) / f64::from(FILL_STEPS);
            draw_polygon(ctx, &polygon(count, |i| fractions[i] * scale), self.color);
        }
        let outline = polygon(count, |i| fractions[i]);
        draw_polygon(ctx, &outline, self.color);
        ctx.draw(&Points {
            coords: &outline,
            color: self.color,
        });
        ctx.layer();

        // Ring values along the first axis, then the axis labels.
        let units_per_cell = (x_bounds[1] - x_bounds[0]) / f64::from(width.max(1));
        let tick_style = Style::default().fg(grid);
        for (fraction, value) in self.rings() {
            ctx.print(
                units_per_cell,
                fraction,
                TextLine::styled(value.to_string(), tick_style),
            );
        }

        let label_style = Style::default()
            .fg(self.label_color)
            .add_modifier(Modifier::BOLD);
        for (idx, datum) in self.data.iter().enumerate() {
            let (x, y) = axis_point(idx, count, LABEL_RADIUS);
            let label = TextLine::styled(datum.theme.clone(), label_style);
            let label_width = label.width() as f64 * units_per_cell;
            let x = label_x(x, label_width, x_bounds);
            let y = y.clamp(y_bounds[0], y_bounds[1]);
            ctx.print(x, y, label);
        }

        if let Some(series) = self.series {
            ctx.print(
                x_bounds[0],
                y_bounds[1],
                TextLine::styled(series.to_string(), Style::default().fg(self.color)),
            );
        }
    }
}

impl Widget for RadarChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = match &self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.clone().render(area, buf);
                inner
            }
            None => area,
        };
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let (x_bounds, y_bounds) = bounds(inner);
        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| self.paint(ctx, x_bounds, y_bounds, inner.width))
            .render(inner, buf);
    }
}

/// Position on axis `index` of `count` at `fraction` of the outer ring.
///
/// The first axis points up, the others follow clockwise.
pub(crate) fn axis_point(index: usize, count: usize, fraction: f64) -> (f64, f64) {
    let angle = FRAC_PI_2 - TAU * index as f64 / count.max(1) as f64;
    (fraction * angle.cos(), fraction * angle.sin())
}

fn polygon(count: usize, fraction: impl Fn(usize) -> f64) -> Vec<(f64, f64)> {
    (0..count)
        .map(|idx| axis_point(idx, count, fraction(idx)))
        .collect()
}

fn draw_polygon(ctx: &mut Context<'_>, points: &[(f64, f64)], color: Color) {
    if points.len() < 2 {
        return;
    }
    for (idx, &(x1, y1)) in points.iter().enumerate() {
        let (x2, y2) = points[(idx + 1) % points.len()];
        ctx.draw(&Line::new(x1, y1, x2, y2, color));
    }
}

/// Canvas bounds that keep the unit circle round in a terminal area.
///
/// Cells are about twice as tall as wide, so one row covers the same distance
/// as two columns.
pub(crate) fn bounds(area: Rect) -> ([f64; 2], [f64; 2]) {
    let ratio = f64::from(area.width) / (2.0 * f64::from(area.height.max(1)));
    let (x_half, y_half) = if ratio >= 1.0 {
        (MARGIN * ratio, MARGIN)
    } else {
        (MARGIN, MARGIN / ratio.max(f64::EPSILON))
    };
    ([-x_half, x_half], [-y_half, y_half])
}

/// Left edge of a label anchored at `x`, so it grows away from the center and
/// stays inside the canvas.
fn label_x(x: f64, label_width: f64, x_bounds: [f64; 2]) -> f64 {
    let anchored = if x.abs() < 0.05 {
        x - label_width / 2.0
    } else if x < 0.0 {
        x - label_width
    } else {
        x
    };
    let right_limit = (x_bounds[1] - label_width).max(x_bounds[0]);
    anchored.clamp(x_bounds[0], right_limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-9 && (actual.1 - expected.1).abs() < 1e-9,
            "{actual:?} != {expected:?}"
        );
    }

    fn buffer_text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn first_axis_points_up_then_clockwise() {
        assert_close(axis_point(0, 4, 1.0), (0.0, 1.0));
        assert_close(axis_point(1, 4, 1.0), (1.0, 0.0));
        assert_close(axis_point(2, 4, 0.5), (0.0, -0.5));
        assert_close(axis_point(3, 4, 1.0), (-1.0, 0.0));
    }

    #[test]
    fn bounds_keep_aspect() {
        let (x, y) = bounds(Rect::new(0, 0, 80, 20));
        assert_eq!(y, [-MARGIN, MARGIN]);
        assert!((x[1] - MARGIN * 2.0).abs() < 1e-9);

        let (x, y) = bounds(Rect::new(0, 0, 20, 20));
        assert_eq!(x, [-MARGIN, MARGIN]);
        assert!((y[1] - MARGIN * 2.0).abs() < 1e-9);
    }

    #[test]
    fn labels_stay_inside() {
        let bounds = [-1.3, 1.3];
        assert!((label_x(1.2, 1.0, bounds) - 0.3).abs() < 1e-9);
        assert_eq!(label_x(-1.0, 1.0, bounds), -1.3);
        assert_eq!(label_x(0.0, 0.4, bounds), -0.2);
    }

    #[test]
    fn one_ring_per_step_for_small_domains() {
        let data = [ThemeScore::new("A", 1)];
        let chart = RadarChart::new(&data, ChartDomain::new(0, 6));
        let values: Vec<u32> = chart.rings().into_iter().map(|(_, v)| v).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn four_rings_for_large_domains() {
        let data = [ThemeScore::new("A", 1)];
        let chart = RadarChart::new(&data, ChartDomain::new(0, 40));
        let values: Vec<u32> = chart.rings().into_iter().map(|(_, v)| v).collect();
        assert_eq!(values, vec![10, 20, 30, 40]);
    }

    #[test]
    fn renders_theme_labels() {
        let data = [
            ThemeScore::new("Nutrition", 6),
            ThemeScore::new("Habitudes alimentaires", 0),
            ThemeScore::new("Hydratation", 3),
        ];
        let area = Rect::new(0, 0, 60, 30);
        let mut buf = Buffer::empty(area);
        RadarChart::new(&data, ChartDomain::new(0, 6))
            .series("Score")
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        for label in ["Nutrition", "Habitudes alimentaires", "Hydratation", "Score"] {
            assert!(text.contains(label), "missing {label}:\n{text}");
        }
    }

    #[test]
    fn renders_without_data() {
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        RadarChart::new(&[], ChartDomain::new(0, 0)).render(area, &mut buf);
    }
}
