//! `motif check`: sweep every variant for determinism, bounds, and
//! sensitivity.

use motif_seed::IntensityLevel;
use motif_variants::VariantId;

/// Minimum share of distinct-seed pairs that must produce different
/// descriptors.
const SENSITIVITY: f64 = 0.95;
/// Pairwise comparison is quadratic; cap the seeds it looks at.
const SENSITIVITY_SEEDS: usize = 64;

#[derive(Debug, Default)]
pub struct Report {
    pub checked: usize,
    pub failures: Vec<String>,
}

impl Report {
    pub const fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Check one variant over `seeds` generated seed strings.
pub fn check_variant(id: VariantId, seeds: usize, report: &mut Report) {
    let names: Vec<String> = std::iter::once(String::new())
        .chain((0..seeds).map(|i| format!("check-{i}")))
        .collect();

    for seed in &names {
        for level in IntensityLevel::ALL {
            let d = id.generate(seed, level);
            report.checked += 1;
            if d != id.generate(seed, level) {
                report.failures.push(format!("{id}: seed {seed:?} ({level}) is not deterministic"));
            }
            if !d.within_bounds() {
                report.failures.push(format!("{id}: seed {seed:?} ({level}) out of bounds"));
            }
        }
    }

    let sample: Vec<_> = names
        .iter()
        .take(SENSITIVITY_SEEDS)
        .map(|s| id.generate(s, IntensityLevel::Medium))
        .collect();
    let mut pairs = 0usize;
    let mut differ = 0usize;
    for (i, a) in sample.iter().enumerate() {
        for b in &sample[i + 1..] {
            pairs += 1;
            differ += usize::from(a != b);
        }
    }
    if pairs > 0 {
        let share = differ as f64 / pairs as f64;
        tracing::debug!(%id, share, "sensitivity");
        if share < SENSITIVITY {
            report.failures.push(format!("{id}: only {:.1}% of seed pairs differ", share * 100.0));
        }
    }
}

pub fn run(seeds: usize) -> Report {
    let mut report = Report::default();
    for &id in VariantId::all() {
        let before = report.failures.len();
        check_variant(id, seeds, &mut report);
        let status = if report.failures.len() == before { "ok" } else { "FAIL" };
        println!("{:<16} {status}", id.name());
    }
    for failure in &report.failures {
        eprintln!("{failure}");
    }
    println!("{} descriptors checked, {} failures", report.checked, report.failures.len());
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_passes_a_short_sweep() {
        let mut report = Report::default();
        for &id in VariantId::all() {
            check_variant(id, 20, &mut report);
        }
        assert!(report.passed(), "{:?}", report.failures);
        assert_eq!(report.checked, 18 * 21 * 3);
    }
}
