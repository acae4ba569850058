//! The contract every visual style implements.

use motif_seed::{IntensityLevel, SeedScope};

use crate::canvas::Appearance;
use crate::descriptor::GeometryDescriptor;
use crate::registry::VariantId;
use crate::track::Track;

/// One procedural visual style.
///
/// `generate` must be a pure function of the scope's streams: it draws the
/// `count` stream first, then per-item fields in index order from its other
/// purpose streams, and never reads `level` for anything but [`Appearance`].
/// Every drawn field is documented by a public `Span`/range constant in the
/// style's module, and `within_bounds` checks exactly those constants.
pub trait Variant: Sized + Into<GeometryDescriptor> {
    const ID: VariantId;

    fn generate(scope: &SeedScope<'_>, level: IntensityLevel) -> Self;

    fn appearance(&self) -> Appearance;

    /// Keyframe targets for the animated presentation.
    fn tracks(&self) -> Vec<Track>;

    /// True if every field lies within the style's documented ranges.
    fn within_bounds(&self) -> bool;
}

/// Run a style's generator under its own namespaced scope.
#[must_use]
pub fn generate<V: Variant>(seed: &str, level: IntensityLevel) -> V {
    V::generate(&SeedScope::new(V::ID.name(), seed), level)
}

/// Run a style's generator and wrap it as a [`GeometryDescriptor`].
#[must_use]
pub fn generate_descriptor<V: Variant>(seed: &str, level: IntensityLevel) -> GeometryDescriptor {
    generate::<V>(seed, level).into()
}
