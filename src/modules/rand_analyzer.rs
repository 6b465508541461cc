use std::collections::HashMap;

use itertools::Itertools;

use crate::constants::lcg_params::MODULUS;
use crate::modules::rng_lc::{RngLC, normalize_bounds};
use crate::types::seed::*;

/// How many raw `next` outputs land on each offset of a `range` call.
///
/// When the span divides the modulus nothing is favored and
/// `heavy_count == light_count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuloBias {
    pub span: Span,
    pub favored: State,     // offsets 0..favored get heavy_count preimages
    pub heavy_count: State,
    pub light_count: State, // every other offset
}

impl ModuloBias {
    pub fn is_uniform(&self) -> bool {
        return self.favored == 0;
    }
}

pub struct RandAnalyzer {}

impl RandAnalyzer {
    pub fn new() -> Self {
        Self {}
    }

    pub fn modulo_bias(&self, min: Bound, max: Bound) -> ModuloBias {
        let (_, span) = normalize_bounds(min, max);
        let span_u = span as State;

        // wider than the generator output: each reachable offset has one preimage
        if MODULUS < span_u {
            return ModuloBias {
                span,
                favored: MODULUS,
                heavy_count: 1,
                light_count: 0,
            };
        }

        let quotient = MODULUS / span_u;
        let remainder = MODULUS % span_u;

        return ModuloBias {
            span,
            favored: remainder,
            heavy_count: if remainder == 0 { quotient } else { quotient + 1 },
            light_count: quotient,
        };
    }

    pub fn range_histogram(&self, rng: &mut RngLC, min: Bound, max: Bound, draws: usize) -> HashMap<Bound, usize> {
        return (0..draws).map(|_| rng.range(min, max)).counts();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_of_two_span_is_uniform() {
        let analyzer = RandAnalyzer::new();
        let bias = analyzer.modulo_bias(0, 255);

        assert!(bias.is_uniform());
        assert_eq!(bias.heavy_count, 1 << 23);
        assert_eq!(bias.light_count, 1 << 23);
    }

    #[test]
    fn bias_ignores_bound_order() {
        let analyzer = RandAnalyzer::new();
        assert_eq!(analyzer.modulo_bias(-5, 5), analyzer.modulo_bias(5, -5));
        assert_eq!(analyzer.modulo_bias(7, 7).span, 1);
        assert!(analyzer.modulo_bias(7, 7).is_uniform());
    }

    #[test]
    fn percent_span_favors_low_offsets() {
        let analyzer = RandAnalyzer::new();
        let bias = analyzer.modulo_bias(100, 1);

        // 2^31 = 100 * 21474836 + 48
        assert_eq!(bias.span, 100);
        assert_eq!(bias.favored, 48);
        assert_eq!(bias.heavy_count, 21_474_837);
        assert_eq!(bias.light_count, 21_474_836);
        assert!(!bias.is_uniform());
    }

    #[test]
    fn full_width_span_leaves_upper_half_unreachable() {
        let analyzer = RandAnalyzer::new();
        let bias = analyzer.modulo_bias(i32::MIN, i32::MAX);

        assert_eq!(bias.span, 1 << 32);
        assert_eq!(bias.favored, MODULUS);
        assert_eq!(bias.light_count, 0);
    }

    #[test]
    fn histogram_counts_every_draw() {
        let analyzer = RandAnalyzer::new();
        let mut rng = RngLC::new(999);
        let histogram = analyzer.range_histogram(&mut rng, 1, 6, 600);

        assert_eq!(histogram.values().sum::<usize>(), 600);
        assert!(histogram.keys().all(|value| (1..=6).contains(value)));
    }

    #[test]
    fn histogram_starts_where_range_would() {
        let analyzer = RandAnalyzer::new();
        let mut rng = RngLC::new(999);
        let histogram = analyzer.range_histogram(&mut rng, 1, 100, 1);

        assert_eq!(histogram.get(&77), Some(&1));
    }
}
