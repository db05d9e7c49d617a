//! Chart demos built on ratatui's `Chart`, `BarChart` and `Sparkline`

pub mod bar;
pub mod line;
pub mod scatter;
pub mod series;
pub mod sparkline;

pub use bar::BarChartDemo;
pub use line::LineChartDemo;
pub use scatter::ScatterDemo;
pub use sparkline::SparklineDemo;
