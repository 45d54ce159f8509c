use std::collections::VecDeque;
use std::num::NonZeroUsize;

use crate::SampleIndex;

/// How much history a [`PlotSeries`] keeps.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HistoryLimit {
    /// Keep every sample for the life of the process.
    #[default]
    Unbounded,

    /// Keep the newest `n` samples, dropping the oldest.
    Newest(NonZeroUsize),
}

impl From<Option<NonZeroUsize>> for HistoryLimit {
    fn from(max_samples: Option<NonZeroUsize>) -> Self {
        max_samples.map_or(Self::Unbounded, Self::Newest)
    }
}

/// An ordered, append-only run of `(sample index, value)` points.
#[derive(Debug, Clone, Default)]
pub struct PlotSeries {
    points: VecDeque<(SampleIndex, f64)>,
    limit: HistoryLimit,
}

impl PlotSeries {
    pub fn new(limit: HistoryLimit) -> Self {
        Self {
            points: VecDeque::new(),
            limit,
        }
    }

    pub fn push(&mut self, index: SampleIndex, value: f64) {
        if let HistoryLimit::Newest(max_len) = self.limit {
            while self.points.len() >= max_len.get() {
                self.points.pop_front();
            }
        }
        self.points.push_back((index, value));
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (SampleIndex, f64)> + '_ {
        self.points.iter().copied()
    }

    pub fn last(&self) -> Option<(SampleIndex, f64)> {
        self.points.back().copied()
    }

    /// The points in the shape `egui_plot` wants.
    pub fn plot_points(&self) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .map(|&(index, value)| [index as f64, value])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbounded_keeps_everything() {
        let mut series = PlotSeries::default();
        for i in 0..1000 {
            series.push(i, 0.5);
        }
        assert_eq!(series.len(), 1000);
        assert_eq!(series.iter().next(), Some((0, 0.5)));
    }

    #[test]
    fn limit_drops_oldest_first() {
        let limit = HistoryLimit::from(NonZeroUsize::new(3));
        let mut series = PlotSeries::new(limit);
        for i in 0..5 {
            series.push(i, i as f64 * 10.0);
        }

        similar_asserts::assert_eq!(
            series.iter().collect::<Vec<_>>(),
            vec![(2, 20.0), (3, 30.0), (4, 40.0)]
        );
        assert_eq!(series.last(), Some((4, 40.0)));
    }

    #[test]
    fn plot_points_use_index_as_x() {
        let mut series = PlotSeries::default();
        series.push(0, -1.0);
        series.push(1, 2.0);
        assert_eq!(series.plot_points(), vec![[0.0, -1.0], [1.0, 2.0]]);
    }
}
