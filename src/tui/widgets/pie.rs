//! Two-slice pie chart drawn on a braille canvas

use std::f64::consts::TAU;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Points},
        Widget,
    },
};

const STEP: f64 = 0.04;

/// A pie chart with up to two slices
#[derive(Debug, Clone)]
pub struct PieChart {
    slices: Vec<(f64, Color)>,
    scale: f64,
    background: Color,
}

impl PieChart {
    /// `slices` are shares that should sum to 1; a zero total draws nothing
    pub fn new(slices: Vec<(f64, Color)>) -> Self {
        Self {
            slices,
            scale: 1.0,
            background: Color::Reset,
        }
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale.clamp(0.0, 1.0);
        self
    }

    pub fn background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Sample points of the disc grouped by slice
    fn points(&self) -> Vec<Vec<(f64, f64)>> {
        let mut buckets = vec![Vec::new(); self.slices.len()];
        let total: f64 = self.slices.iter().map(|(share, _)| share.max(0.0)).sum();
        if total <= 0.0 {
            return buckets;
        }

        let radius = self.scale;
        let steps = (2.0 / STEP) as i32;
        for i in 0..=steps {
            for j in 0..=steps {
                let x = -1.0 + i as f64 * STEP;
                let y = -1.0 + j as f64 * STEP;
                if x * x + y * y > radius * radius {
                    continue;
                }
                // Clockwise from twelve o'clock
                let angle = (x.atan2(y) + TAU) % TAU;
                let position = angle / TAU * total;
                let mut start = 0.0;
                for (index, (share, _)) in self.slices.iter().enumerate() {
                    start += share.max(0.0);
                    if position < start || index + 1 == self.slices.len() {
                        buckets[index].push((x, y));
                        break;
                    }
                }
            }
        }
        buckets
    }
}

impl Widget for PieChart {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let buckets = self.points();
        // Cells are about twice as tall as wide
        let aspect = area.width as f64 / (area.height as f64 * 2.0);
        let x_bounds = if aspect >= 1.0 {
            [-aspect, aspect]
        } else {
            [-1.0, 1.0]
        };
        let y_bounds = if aspect >= 1.0 {
            [-1.0, 1.0]
        } else {
            [-1.0 / aspect, 1.0 / aspect]
        };

        Canvas::default()
            .marker(Marker::Braille)
            .background_color(self.background)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| {
                for (coords, (_, color)) in buckets.iter().zip(&self.slices) {
                    ctx.draw(&Points {
                        coords,
                        color: *color,
                    });
                }
            })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_split_by_share() {
        let chart = PieChart::new(vec![(0.75, Color::Green), (0.25, Color::Red)]);
        let buckets = chart.points();
        let first = buckets[0].len() as f64;
        let second = buckets[1].len() as f64;
        let share = first / (first + second);
        assert!((share - 0.75).abs() < 0.05, "share was {}", share);
    }

    #[test]
    fn test_empty_chart_has_no_points() {
        let chart = PieChart::new(vec![(0.0, Color::Green), (0.0, Color::Red)]);
        assert!(chart.points().iter().all(|bucket| bucket.is_empty()));
    }

    #[test]
    fn test_scale_shrinks_disc() {
        let full = PieChart::new(vec![(1.0, Color::Green)]).points()[0].len();
        let small = PieChart::new(vec![(1.0, Color::Green)]).scale(0.5).points()[0].len();
        assert!(small < full);
    }

    #[test]
    fn test_renders_without_panicking() {
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        PieChart::new(vec![(0.6, Color::Green), (0.4, Color::Red)]).render(area, &mut buf);
        PieChart::new(Vec::new()).render(Rect::new(0, 0, 0, 0), &mut Buffer::empty(Rect::new(0, 0, 0, 0)));
    }
}
