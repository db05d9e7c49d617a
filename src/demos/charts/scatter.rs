//! Seeded point clusters on a scatter plot

use crate::demos::{panel, Demo, Hint};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{KeyCode, KeyEvent};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Chart, Dataset, GraphType},
    Frame,
};

pub const POINTS_PER_CLUSTER: usize = 40;
pub const BOUNDS: [f64; 2] = [0.0, 100.0];
const SPREAD: f64 = 12.0;

pub struct Cluster {
    pub name: &'static str,
    pub center: (f64, f64),
    pub color: Color,
    pub points: Vec<(f64, f64)>,
}

pub struct ScatterDemo {
    title: String,
    rng: StdRng,
    pub clusters: Vec<Cluster>,
}

impl ScatterDemo {
    pub fn new(title: String, seed: u64) -> Self {
        let clusters = vec![
            Cluster {
                name: "north",
                center: (30.0, 70.0),
                color: DEFAULT_THEME.primary,
                points: Vec::new(),
            },
            Cluster {
                name: "east",
                center: (70.0, 55.0),
                color: DEFAULT_THEME.secondary,
                points: Vec::new(),
            },
            Cluster {
                name: "south",
                center: (45.0, 25.0),
                color: DEFAULT_THEME.success,
                points: Vec::new(),
            },
        ];
        let mut demo = ScatterDemo {
            title,
            rng: StdRng::seed_from_u64(seed),
            clusters,
        };
        demo.resample();
        demo
    }

    pub fn resample(&mut self) {
        for cluster in self.clusters.iter_mut() {
            let (cx, cy) = cluster.center;
            cluster.points = (0..POINTS_PER_CLUSTER)
                .map(|_| {
                    let x = cx + self.rng.gen_range(-SPREAD..=SPREAD);
                    let y = cy + self.rng.gen_range(-SPREAD..=SPREAD);
                    (x.clamp(BOUNDS[0], BOUNDS[1]), y.clamp(BOUNDS[0], BOUNDS[1]))
                })
                .collect();
        }
    }
}

impl Demo for ScatterDemo {
    fn title(&self) -> &str {
        &self.title
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let datasets: Vec<Dataset> = self
            .clusters
            .iter()
            .map(|c| {
                Dataset::default()
                    .name(c.name)
                    .marker(symbols::Marker::Dot)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(c.color))
                    .data(&c.points)
            })
            .collect();

        let labels = || {
            vec![
                Span::raw(format!("{:.0}", BOUNDS[0])),
                Span::raw(format!("{:.0}", (BOUNDS[0] + BOUNDS[1]) / 2.0)),
                Span::raw(format!("{:.0}", BOUNDS[1])),
            ]
        };
        let chart = Chart::new(datasets)
            .block(panel(&self.title, true))
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(DEFAULT_THEME.muted))
                    .bounds(BOUNDS)
                    .labels(labels()),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(DEFAULT_THEME.muted))
                    .bounds(BOUNDS)
                    .labels(labels()),
            );
        frame.render_widget(chart, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('r') => self.resample(),
            _ => return false,
        }
        true
    }

    fn hints(&self) -> &'static [Hint] {
        &[("r", "resample")]
    }
}
