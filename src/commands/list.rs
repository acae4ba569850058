//! `motif list`

use anyhow::Context;
use motif_variants::{Family, VariantId};
use regex::Regex;

/// Variants matching both filters, in registry order.
pub fn matching(family: Option<Family>, filter: Option<&Regex>) -> Vec<VariantId> {
    VariantId::all()
        .iter()
        .copied()
        .filter(|id| family.is_none_or(|f| id.family() == f))
        .filter(|id| filter.is_none_or(|re| re.is_match(id.name())))
        .collect()
}

pub fn run(family: Option<Family>, filter: Option<&str>) -> anyhow::Result<()> {
    let filter = filter
        .map(|pattern| Regex::new(pattern).with_context(|| format!("invalid --filter '{pattern}'")))
        .transpose()?;
    for id in matching(family, filter.as_ref()) {
        println!("{:<16} {:<8} {}", id.name(), id.family().name(), id.summary());
    }
    Ok(())
}
