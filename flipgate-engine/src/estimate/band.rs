//! Shared percentile-band plumbing for both uncertainty modes.

use rustc_hash::FxHashMap;

/// Percentile band totals plus the per-item and per-trade views the
/// drivers list and trade breakdown are built from.
#[derive(Debug, Clone)]
pub(crate) struct BandResult {
    pub p50: f64,
    pub p80: f64,
    pub p95: f64,
    /// 80th-percentile cost per line item, in input order.
    pub item_p80: Vec<f64>,
    /// (p50, p80, p95) restricted to each trade's items.
    pub trade_bands: FxHashMap<String, (f64, f64, f64)>,
}

impl BandResult {
    pub fn zero() -> Self {
        Self {
            p50: 0.0,
            p80: 0.0,
            p95: 0.0,
            item_p80: Vec::new(),
            trade_bands: FxHashMap::default(),
        }
    }
}

/// Index into an ascending-sorted sample vector for quantile `q`:
/// `floor(n × q)`, clamped to the last element.
pub(crate) fn quantile_index(n: usize, q: f64) -> usize {
    ((n as f64 * q).floor() as usize).min(n.saturating_sub(1))
}

/// Read a quantile off an ascending-sorted sample vector.
pub(crate) fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    sorted[quantile_index(sorted.len(), q)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_uses_floor_and_clamps() {
        assert_eq!(quantile_index(100, 0.50), 50);
        assert_eq!(quantile_index(100, 0.95), 95);
        assert_eq!(quantile_index(1, 0.95), 0);
        assert_eq!(quantile_index(3, 0.80), 2);
    }

    #[test]
    fn quantile_reads_sorted_samples() {
        let samples: Vec<f64> = (0..10).map(|i| i as f64).collect();
        assert_eq!(quantile(&samples, 0.50), 5.0);
        assert_eq!(quantile(&samples, 0.80), 8.0);
        assert_eq!(quantile(&samples, 0.95), 9.0);
        assert_eq!(quantile(&[], 0.50), 0.0);
    }
}
