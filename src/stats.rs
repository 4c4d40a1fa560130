//! Small statistics layer feeding the figure renderers: histogram binning,
//! box-plot summaries, Pearson correlation, and the normal quantiles used by
//! the Q-Q panel.

use statrs::distribution::{ContinuousCDF, Normal};

/// Count values into equal-width bins over [min, max].
///
/// Returns (bin start, count) per bin. Values outside the range are dropped;
/// a value exactly at `max` lands in the last bin.
pub fn histogram_counts(values: &[f64], min: f64, max: f64, bins: usize) -> Vec<(f64, usize)> {
    if bins == 0 || !(max > min) {
        return Vec::new();
    }
    let bin_width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &value in values {
        if value < min || value > max {
            continue;
        }
        let mut idx = ((value - min) / bin_width).floor() as isize;
        if idx as usize >= bins {
            idx = (bins - 1) as isize;
        }
        if idx >= 0 {
            counts[idx as usize] += 1;
        }
    }
    (0..bins)
        .map(|i| (min + i as f64 * bin_width, counts[i]))
        .collect()
}

/// Histogram normalized so the bars integrate to one:
/// height = count / (n * bin_width).
pub fn density_histogram(values: &[f64], min: f64, max: f64, bins: usize) -> Vec<(f64, f64)> {
    let counts = histogram_counts(values, min, max, bins);
    let n = values.len().max(1) as f64;
    let bin_width = (max - min) / bins.max(1) as f64;
    counts
        .into_iter()
        .map(|(start, count)| (start, count as f64 / (n * bin_width)))
        .collect()
}

/// Box-plot summary: quartiles plus whiskers at the furthest samples within
/// 1.5 * IQR of the box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxStats {
    pub whisker_lo: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_hi: f64,
}

impl BoxStats {
    pub fn from_samples(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).expect("non-finite sample"));

        let q1 = quantile_sorted(&sorted, 0.25);
        let median = quantile_sorted(&sorted, 0.5);
        let q3 = quantile_sorted(&sorted, 0.75);
        let iqr = q3 - q1;
        let lo_fence = q1 - 1.5 * iqr;
        let hi_fence = q3 + 1.5 * iqr;

        let whisker_lo = sorted
            .iter()
            .copied()
            .find(|&x| x >= lo_fence)
            .unwrap_or(sorted[0]);
        let whisker_hi = sorted
            .iter()
            .rev()
            .copied()
            .find(|&x| x <= hi_fence)
            .unwrap_or(sorted[sorted.len() - 1]);

        Some(Self {
            whisker_lo,
            q1,
            median,
            q3,
            whisker_hi,
        })
    }
}

/// Linear-interpolation quantile over an already sorted slice.
fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let frac = h - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

/// Pearson correlation coefficient. Returns 0.0 when either side is constant.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(x.len(), y.len(), "pearson inputs must have equal length");
    let n = x.len();
    if n == 0 {
        return 0.0;
    }
    let mean_x = x.iter().sum::<f64>() / n as f64;
    let mean_y = y.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for i in 0..n {
        let dx = x[i] - mean_x;
        let dy = y[i] - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 { 0.0 } else { cov / denom }
}

/// Theoretical standard-normal quantiles for a sample of size `n`, using
/// Filliben's order-statistic medians. Paired against the ordered sample in
/// the Q-Q panel.
pub fn normal_order_quantiles(n: usize) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    let std_normal = Normal::new(0.0, 1.0).expect("unit normal");
    let nf = n as f64;
    (1..=n)
        .map(|i| {
            let m = if i == 1 {
                1.0 - 0.5f64.powf(1.0 / nf)
            } else if i == n {
                0.5f64.powf(1.0 / nf)
            } else {
                (i as f64 - 0.3175) / (nf + 0.365)
            };
            std_normal.inverse_cdf(m)
        })
        .collect()
}

/// Least-squares fit y = slope * x + intercept.
pub fn linear_fit(x: &[f64], y: &[f64]) -> (f64, f64) {
    assert_eq!(x.len(), y.len(), "linear_fit inputs must have equal length");
    let n = x.len();
    if n == 0 {
        return (0.0, 0.0);
    }
    let mean_x = x.iter().sum::<f64>() / n as f64;
    let mean_y = y.iter().sum::<f64>() / n as f64;
    let mut num = 0.0;
    let mut den = 0.0;
    for i in 0..n {
        let dx = x[i] - mean_x;
        num += dx * (y[i] - mean_y);
        den += dx * dx;
    }
    let slope = if den == 0.0 { 0.0 } else { num / den };
    (slope, mean_y - slope * mean_x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_bins_and_edges() {
        let values = [0.0, 0.1, 0.5, 0.99, 1.0, 1.5, -0.1];
        let counts = histogram_counts(&values, 0.0, 1.0, 2);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0], (0.0, 2));
        // 0.5, 0.99, and the max-edge value clamped into the last bin
        assert_eq!(counts[1], (0.5, 3));
    }

    #[test]
    fn density_integrates_to_one() {
        let values: Vec<f64> = (0..100).map(|i| i as f64 / 100.0).collect();
        let density = density_histogram(&values, 0.0, 1.0, 10);
        let integral: f64 = density.iter().map(|(_, h)| h * 0.1).sum();
        assert!((integral - 1.0).abs() < 1e-9);
    }

    #[test]
    fn box_stats_on_known_data() {
        let values: Vec<f64> = (1..=9).map(|i| i as f64).collect();
        let stats = BoxStats::from_samples(&values).unwrap();
        assert_eq!(stats.median, 5.0);
        assert_eq!(stats.q1, 3.0);
        assert_eq!(stats.q3, 7.0);
        assert_eq!(stats.whisker_lo, 1.0);
        assert_eq!(stats.whisker_hi, 9.0);
    }

    #[test]
    fn box_stats_whiskers_exclude_outlier() {
        let mut values: Vec<f64> = (1..=9).map(|i| i as f64).collect();
        values.push(100.0);
        let stats = BoxStats::from_samples(&values).unwrap();
        assert!(stats.whisker_hi < 100.0);
    }

    #[test]
    fn pearson_perfect_and_inverse() {
        let x: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| 2.0 * v + 1.0).collect();
        let neg: Vec<f64> = x.iter().map(|v| -v).collect();
        assert!((pearson(&x, &y) - 1.0).abs() < 1e-12);
        assert!((pearson(&x, &neg) + 1.0).abs() < 1e-12);
        assert_eq!(pearson(&x, &vec![3.0; 20]), 0.0);
    }

    #[test]
    fn normal_quantiles_are_symmetric_and_increasing() {
        let q = normal_order_quantiles(51);
        assert_eq!(q.len(), 51);
        for w in q.windows(2) {
            assert!(w[0] < w[1]);
        }
        // median position maps to the distribution median
        assert!(q[25].abs() < 1e-9);
        assert!((q[0] + q[50]).abs() < 1e-9);
    }

    #[test]
    fn linear_fit_recovers_line() {
        let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| 3.0 * v - 2.0).collect();
        let (slope, intercept) = linear_fit(&x, &y);
        assert!((slope - 3.0).abs() < 1e-12);
        assert!((intercept + 2.0).abs() < 1e-12);
    }
}
