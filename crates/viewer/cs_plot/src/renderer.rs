use cs_subscriber::ScalarSnapshot;

use crate::series::{HistoryLimit, PlotSeries};

/// Counts renderer ticks. Shared by both series so their x values line up.
pub type SampleIndex = u64;

/// Owns the two plotted histories.
///
/// Each [`Self::tick`] appends one point to each series under the same index,
/// so both series always have the same length and index column.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    next_index: SampleIndex,
    series_a: PlotSeries,
    series_b: PlotSeries,
}

impl Renderer {
    pub fn new(limit: HistoryLimit) -> Self {
        Self {
            next_index: 0,
            series_a: PlotSeries::new(limit),
            series_b: PlotSeries::new(limit),
        }
    }

    /// Record `snapshot` as the next sample. Returns the index it was stored under.
    pub fn tick(&mut self, snapshot: ScalarSnapshot) -> SampleIndex {
        let index = self.next_index;
        self.series_a.push(index, snapshot.value_a);
        self.series_b.push(index, snapshot.value_b);
        self.next_index += 1;
        index
    }

    /// Number of ticks so far, including samples a [`HistoryLimit`] has since dropped.
    pub fn num_ticks(&self) -> u64 {
        self.next_index
    }

    pub fn series_a(&self) -> &PlotSeries {
        &self.series_a
    }

    pub fn series_b(&self) -> &PlotSeries {
        &self.series_b
    }
}
