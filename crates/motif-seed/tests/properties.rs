//! Seed-quantified properties of the PRNG and the intensity table.

use motif_seed::{IntensityLevel, SeedScope, SeededRng, scale_opacity, scale_stroke};
use proptest::prelude::*;

proptest! {
    #[test]
    fn any_seed_is_reproducible(seed in ".*") {
        let mut a = SeededRng::new(&seed);
        let mut b = SeededRng::new(&seed);
        for _ in 0..64 {
            prop_assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn rand_int_stays_inclusive(seed in ".*", lo in -1000i64..1000, width in 0i64..500) {
        let mut rng = SeededRng::new(&seed);
        let hi = lo + width;
        for _ in 0..32 {
            let v = rng.rand_int(lo, hi);
            prop_assert!(v >= lo && v <= hi, "{} not in [{}, {}]", v, lo, hi);
        }
    }

    #[test]
    fn rand_float_stays_bounded(seed in ".*", lo in -1e6f64..1e6, width in 0f64..1e6) {
        let mut rng = SeededRng::new(&seed);
        let hi = lo + width;
        for _ in 0..32 {
            let v = rng.rand_float(lo, hi);
            prop_assert!(v >= lo && v <= hi, "{} not in [{}, {}]", v, lo, hi);
        }
    }

    #[test]
    fn scoped_streams_are_reproducible(seed in ".*", purpose in "[a-z]{1,8}") {
        let scope = SeedScope::new("contentFlow", &seed);
        let mut a = scope.stream(&purpose);
        let mut b = scope.stream(&purpose);
        prop_assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn opacity_is_monotone_and_clamped(base in 0f64..=1.0) {
        let subtle = scale_opacity(base, IntensityLevel::Subtle);
        let medium = scale_opacity(base, IntensityLevel::Medium);
        let bold = scale_opacity(base, IntensityLevel::Bold);
        prop_assert!(subtle <= medium && medium <= bold);
        for v in [subtle, medium, bold] {
            prop_assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn opacity_clamps_any_input(base in proptest::num::f64::ANY) {
        for level in IntensityLevel::ALL {
            let v = scale_opacity(base, level);
            prop_assert!((0.0..=1.0).contains(&v), "{} -> {}", base, v);
        }
    }

    #[test]
    fn stroke_is_monotone_and_non_negative(base in -10f64..10.0) {
        let widths: Vec<f64> = IntensityLevel::ALL.iter().map(|&l| scale_stroke(base, l)).collect();
        prop_assert!(widths.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(widths.iter().all(|&w| w >= 0.0));
    }
}
