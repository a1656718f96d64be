use channel_thresh_core::ChannelStats;
use log::debug;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Otsu threshold level for a single channel.
///
/// `pmf` and `cdf` are that channel's statistics over the full intensity
/// domain, as produced by `channel-thresh-core`. The returned level is the
/// argmax of the between-class variance score
///
/// ```text
/// score[k] = (mu_total * cdf[k] - mu[k])^2 / (cdf[k] * (1 - cdf[k]))
/// ```
///
/// where `mu[k]` is the cumulative first moment of the PMF and `mu_total`
/// its value at the top of the domain (the channel mean).
///
/// Levels whose denominator is zero (CDF exactly 0 or 1) carry no
/// class-separation information; their score is substituted with 0 instead
/// of propagating a NaN. Ties resolve to the lowest level, so a channel
/// with no positive score anywhere (all mass at one level, or no mass at
/// all) yields 0.
pub fn otsu_level(pmf: &[f64], cdf: &[f64]) -> usize {
    debug_assert_eq!(pmf.len(), cdf.len());
    if pmf.is_empty() {
        return 0;
    }

    // Cumulative first moment; the accumulator is local to this channel.
    let mut mu = Vec::with_capacity(pmf.len());
    let mut acc = 0.0f64;
    for (k, &p) in pmf.iter().enumerate() {
        acc += k as f64 * p;
        mu.push(acc);
    }
    let mu_total = acc;

    let mut best_level = 0usize;
    let mut best_score = f64::NEG_INFINITY;
    for (k, (&w, &m)) in cdf.iter().zip(mu.iter()).enumerate() {
        let score = between_class_score(mu_total, w, m);
        // strict comparison: on ties the first (lowest) level wins
        if score > best_score {
            best_score = score;
            best_level = k;
        }
    }
    best_level
}

/// Between-class variance score at one candidate level.
fn between_class_score(mu_total: f64, cdf_k: f64, mu_k: f64) -> f64 {
    let denom = cdf_k * (1.0 - cdf_k);
    if denom <= 0.0 {
        return 0.0;
    }
    let score = (mu_total * cdf_k - mu_k).powi(2) / denom;
    if score.is_finite() {
        score
    } else {
        0.0
    }
}

/// Otsu threshold for every channel, in channel order.
///
/// Channels are statistically independent: each call of [`otsu_level`]
/// starts from fresh accumulators and no score state is shared.
#[cfg_attr(feature = "tracing", instrument(level = "debug", skip(stats)))]
pub fn otsu_thresholds(stats: &ChannelStats) -> Vec<usize> {
    (0..stats.channels())
        .map(|c| {
            let level = otsu_level(&stats.pmf[c], &stats.cdf[c]);
            debug!("channel {c}: threshold level {level}");
            level
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use channel_thresh_core::{ChannelHistogram, ChannelStats, NUM_LEVELS};

    fn stats_from(counts_per_channel: &[&[(usize, u32)]]) -> ChannelStats {
        let mut hist = ChannelHistogram::new(counts_per_channel.len(), NUM_LEVELS);
        for (c, counts) in counts_per_channel.iter().enumerate() {
            for &(level, n) in *counts {
                for _ in 0..n {
                    hist.add_sample(c, level);
                }
            }
        }
        ChannelStats::from_histogram(&hist)
    }

    #[test]
    fn separates_two_populations_at_the_boundary() {
        // dark population at 100, bright population at 200: every level in
        // [100, 199] separates them perfectly, the lowest wins
        let stats = stats_from(&[&[(100, 60), (200, 40)]]);
        assert_eq!(otsu_level(&stats.pmf[0], &stats.cdf[0]), 100);
    }

    #[test]
    fn three_population_histogram_splits_between_modes() {
        let stats = stats_from(&[&[(30, 40), (100, 30), (220, 30)]]);
        assert_eq!(otsu_level(&stats.pmf[0], &stats.cdf[0]), 100);
    }

    #[test]
    fn plateau_ties_resolve_to_lowest_level() {
        // equal spikes at 10 and 20: scores on [10, 19] are bit-identical
        let stats = stats_from(&[&[(10, 5), (20, 5)]]);
        assert_eq!(otsu_level(&stats.pmf[0], &stats.cdf[0]), 10);
    }

    #[test]
    fn single_level_mass_yields_zero() {
        // CDF is 0 below the spike and 1 at or above it, so every score is
        // substituted with 0 and the lowest level wins
        let stats = stats_from(&[&[(128, 999)]]);
        assert_eq!(otsu_level(&stats.pmf[0], &stats.cdf[0]), 0);
    }

    #[test]
    fn empty_channel_yields_zero() {
        let hist = ChannelHistogram::new(1, NUM_LEVELS);
        let stats = ChannelStats::from_histogram(&hist);
        assert_eq!(otsu_level(&stats.pmf[0], &stats.cdf[0]), 0);
    }

    #[test]
    fn channels_are_independent() {
        // per-channel two-population histograms with different boundaries
        let stats = stats_from(&[
            &[(50, 30), (250, 70)],
            &[(100, 60), (200, 40)],
            &[(200, 50), (240, 50)],
        ]);
        assert_eq!(otsu_thresholds(&stats), vec![50, 100, 200]);
    }

    #[test]
    fn repeated_runs_are_deterministic() {
        let stats = stats_from(&[&[(12, 7), (90, 13), (200, 5), (201, 5)]]);
        let first = otsu_thresholds(&stats);
        let second = otsu_thresholds(&stats);
        assert_eq!(first, second);
    }

    #[test]
    fn thresholds_stay_in_domain() {
        let inputs: [&[(usize, u32)]; 5] = [
            &[(0, 1)],
            &[(255, 9)],
            &[(0, 4), (255, 4)],
            &[(1, 1), (2, 1), (3, 1), (254, 3)],
            &[(7, 100), (8, 1), (9, 100)],
        ];
        for counts in inputs {
            let stats = stats_from(&[counts]);
            let level = otsu_level(&stats.pmf[0], &stats.cdf[0]);
            assert!(level < NUM_LEVELS, "level {level} out of domain");
        }
    }
}
