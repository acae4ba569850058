//! Seed-quantified properties over the whole registry.

use motif_seed::IntensityLevel;
use motif_variants::VariantId;
use proptest::prelude::*;
use proptest::sample::select;

fn any_variant() -> impl Strategy<Value = VariantId> {
    select(VariantId::all().to_vec())
}

fn any_level() -> impl Strategy<Value = IntensityLevel> {
    select(IntensityLevel::ALL.to_vec())
}

proptest! {
    #[test]
    fn generation_is_deterministic(id in any_variant(), seed in ".*", level in any_level()) {
        prop_assert_eq!(id.generate(&seed, level), id.generate(&seed, level));
    }

    #[test]
    fn generation_is_bounded(id in any_variant(), seed in ".*", level in any_level()) {
        let d = id.generate(&seed, level);
        prop_assert!(d.within_bounds(), "{} {:?}", id, seed);
        prop_assert!(d.appearance().is_valid());
    }

    #[test]
    fn geometry_ignores_intensity(id in any_variant(), seed in ".*") {
        let a = id.generate(&seed, IntensityLevel::Subtle);
        let b = id.generate(&seed, IntensityLevel::Bold);
        prop_assert_eq!(a.tracks(), b.tracks());
    }

    #[test]
    fn case_never_matters(id in any_variant()) {
        let upper = id.name().to_ascii_uppercase();
        prop_assert_eq!(VariantId::from_name(&upper), Some(id));
    }
}
