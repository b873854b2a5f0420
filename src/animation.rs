//! Derived parameters for the floating-symbols animation.
//!
//! The config stores the user-facing ranges; the values the embedded
//! script actually needs (range widths and spawn cadence) are recomputed
//! here on every build rather than stored.

use crate::config::FloatingConfig;

/// Values derived from a [`FloatingConfig`], injected into every page's
/// `FLOATING` script constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingParams {
    /// `max_duration - min_duration`, in seconds.
    pub duration_range: f64,
    /// `max_size - min_size`, in rem.
    pub size_range: f64,
    /// Spawn timer period in milliseconds.
    pub spawn_interval_ms: u64,
}

impl FloatingParams {
    /// Derive animation ranges and spawn cadence from the resolved config.
    ///
    /// The interval spaces exactly `count` spawns evenly across one full
    /// `max_duration` cycle. `count == 1` degenerates to a single interval
    /// equal to `max_duration`.
    pub fn derive(floating: &FloatingConfig) -> Self {
        Self {
            duration_range: floating.max_duration - floating.min_duration,
            size_range: floating.max_size - floating.min_size,
            spawn_interval_ms: (floating.max_duration / f64::from(floating.count) * 1000.0)
                .floor() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_config_spawns_every_750ms() {
        let params = FloatingParams::derive(&FloatingConfig::default());
        assert_eq!(params.spawn_interval_ms, 750);
        assert_eq!(params.duration_range, 10.0);
        assert_eq!(params.size_range, 1.5);
    }

    #[test]
    fn single_symbol_uses_full_cycle() {
        let floating = FloatingConfig {
            count: 1,
            ..FloatingConfig::default()
        };
        let params = FloatingParams::derive(&floating);
        assert_eq!(params.spawn_interval_ms, 15_000);
    }

    #[test]
    fn equal_bounds_give_zero_ranges() {
        let floating = FloatingConfig {
            min_duration: 8.0,
            max_duration: 8.0,
            min_size: 2.0,
            max_size: 2.0,
            ..FloatingConfig::default()
        };
        let params = FloatingParams::derive(&floating);
        assert_eq!(params.duration_range, 0.0);
        assert_eq!(params.size_range, 0.0);
    }

    #[test]
    fn interval_is_floored() {
        let floating = FloatingConfig {
            count: 7,
            max_duration: 10.0,
            ..FloatingConfig::default()
        };
        // 10 / 7 * 1000 = 1428.57... → 1428
        let params = FloatingParams::derive(&floating);
        assert_eq!(params.spawn_interval_ms, 1428);
    }
}
