//! Histogram-derived channel statistics.
//!
//! Probability mass functions and cumulative distribution functions are the
//! inputs of the between-class variance optimizer. Both are pure functions
//! of the histogram; a channel with zero samples yields all-zero rows
//! instead of dividing by zero.

use crate::ChannelHistogram;

/// Per-channel PMF: `pmf[c][k]` is the probability of a sample of channel
/// `c` having intensity `k`. A zero-sample channel yields an all-zero row.
pub fn histogram_to_pmf(hist: &ChannelHistogram) -> Vec<Vec<f64>> {
    (0..hist.channels())
        .map(|c| {
            let total = hist.total_count(c);
            if total == 0 {
                return vec![0.0; hist.num_levels()];
            }
            let total = total as f64;
            hist.channel(c)
                .iter()
                .map(|&n| f64::from(n) / total)
                .collect()
        })
        .collect()
}

/// Per-channel CDF: running accumulation of the PMF, so `cdf[c][k]` is the
/// probability of a sample lying at or below level `k`.
pub fn histogram_to_cdf(hist: &ChannelHistogram) -> Vec<Vec<f64>> {
    histogram_to_pmf(hist).into_iter().map(running_sum).collect()
}

fn running_sum(pmf: Vec<f64>) -> Vec<f64> {
    let mut acc = 0.0;
    pmf.into_iter()
        .map(|p| {
            acc += p;
            acc
        })
        .collect()
}

/// PMF and CDF of every channel, computed together from one histogram pass.
#[derive(Clone, Debug)]
pub struct ChannelStats {
    pub pmf: Vec<Vec<f64>>,
    pub cdf: Vec<Vec<f64>>,
}

impl ChannelStats {
    pub fn from_histogram(hist: &ChannelHistogram) -> Self {
        let pmf = histogram_to_pmf(hist);
        let cdf = pmf.iter().map(|row| running_sum(row.clone())).collect();
        Self { pmf, cdf }
    }

    pub fn channels(&self) -> usize {
        self.pmf.len()
    }
}
