//! Sliding window of chart points
//!
//! Streaming charts keep the most recent `capacity` points. When the window
//! holds more points than the plot has columns, [`Series::downsample`]
//! averages neighbouring points into buckets so every column gets one.

use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct Series {
    points: VecDeque<(f64, f64)>,
    capacity: usize,
}

impl Series {
    /// `capacity` is raised to at least 1
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Series {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a point, evicting the oldest when full
    pub fn push(&mut self, x: f64, y: f64) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back((x, y));
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn last(&self) -> Option<(f64, f64)> {
        self.points.back().copied()
    }

    pub fn points(&self) -> Vec<(f64, f64)> {
        self.points.iter().copied().collect()
    }

    /// x range of the window; `[0, 1]` when empty, widened when degenerate
    pub fn x_bounds(&self) -> [f64; 2] {
        match (self.points.front(), self.points.back()) {
            (Some(&(first, _)), Some(&(last, _))) if last > first => [first, last],
            (Some(&(first, _)), Some(_)) => [first, first + 1.0],
            _ => [0.0, 1.0],
        }
    }

    /// y range padded by `margin` (as a fraction of the span)
    pub fn y_bounds(&self, margin: f64) -> [f64; 2] {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &(_, y) in &self.points {
            min = min.min(y);
            max = max.max(y);
        }
        if !min.is_finite() {
            return [0.0, 1.0];
        }
        let span = (max - min).max(1.0);
        [min - span * margin, max + span * margin]
    }

    /// At most `max_points` points, each the mean of a contiguous bucket
    pub fn downsample(&self, max_points: usize) -> Vec<(f64, f64)> {
        let n = self.points.len();
        if max_points == 0 {
            return Vec::new();
        }
        if n <= max_points {
            return self.points();
        }

        let mut out = Vec::with_capacity(max_points);
        for bucket in 0..max_points {
            let start = bucket * n / max_points;
            let end = ((bucket + 1) * n / max_points).max(start + 1);
            let (sx, sy) = self
                .points
                .range(start..end)
                .fold((0.0, 0.0), |(ax, ay), &(x, y)| (ax + x, ay + y));
            let count = (end - start) as f64;
            out.push((sx / count, sy / count));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_evicts_oldest() {
        let mut series = Series::new(3);
        for i in 0..5 {
            series.push(i as f64, i as f64 * 10.0);
        }
        assert_eq!(series.points(), vec![(2.0, 20.0), (3.0, 30.0), (4.0, 40.0)]);
        assert_eq!(series.x_bounds(), [2.0, 4.0]);
    }

    #[test]
    fn test_empty_bounds() {
        let series = Series::new(10);
        assert_eq!(series.x_bounds(), [0.0, 1.0]);
        assert_eq!(series.y_bounds(0.1), [0.0, 1.0]);
    }

    #[test]
    fn test_single_point_bounds_not_degenerate() {
        let mut series = Series::new(10);
        series.push(5.0, 3.0);
        assert_eq!(series.x_bounds(), [5.0, 6.0]);
        let [lo, hi] = series.y_bounds(0.0);
        assert!(lo <= 3.0 && hi >= 3.0);
    }

    #[test]
    fn test_downsample_averages_buckets() {
        let mut series = Series::new(8);
        for i in 0..8 {
            series.push(i as f64, i as f64);
        }
        let reduced = series.downsample(4);
        assert_eq!(reduced, vec![(0.5, 0.5), (2.5, 2.5), (4.5, 4.5), (6.5, 6.5)]);
    }

    #[test]
    fn test_downsample_noop_when_small() {
        let mut series = Series::new(8);
        series.push(1.0, 2.0);
        assert_eq!(series.downsample(10), vec![(1.0, 2.0)]);
        assert!(series.downsample(0).is_empty());
    }

    #[test]
    fn test_zero_capacity_raised() {
        let mut series = Series::new(0);
        series.push(1.0, 1.0);
        series.push(2.0, 2.0);
        assert_eq!(series.capacity(), 1);
        assert_eq!(series.last(), Some((2.0, 2.0)));
    }
}
