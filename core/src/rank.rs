use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

/// Item (document id or term) to floating-point weight. Ordering is not
/// guaranteed; [`sort_descending`] imposes one.
pub type ScoreMap = HashMap<String, f64>;

/// One ranked entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredItem {
    pub item: String,
    pub weight: f64,
}

/// The ranked partition. Both buckets are sorted by weight descending.
#[derive(Debug, Clone, Serialize)]
pub struct RankedResult {
    pub positive: Vec<ScoredItem>,
    pub negative: Vec<ScoredItem>,
}

/// How the ordered list is cut into positive and negative buckets. One rule
/// is chosen per run; rules are never mixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplitRule {
    /// Positive iff weight is strictly above the threshold.
    Threshold(f64),
    /// The top `fraction` of the list by rank is positive. The boundary
    /// count is ceil(fraction * total).
    TopFraction(f64),
}

impl Default for SplitRule {
    fn default() -> Self {
        SplitRule::TopFraction(0.2)
    }
}

/// Sort by weight descending; ties fall back to the item key ascending so
/// output is reproducible.
pub fn sort_descending(scores: &ScoreMap) -> Vec<ScoredItem> {
    let mut ordered: Vec<ScoredItem> = scores
        .iter()
        .map(|(item, &weight)| ScoredItem {
            item: item.clone(),
            weight,
        })
        .collect();
    ordered.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.item.cmp(&b.item))
    });
    ordered
}

/// Sort and partition. Every input item lands in exactly one bucket, and
/// both buckets inherit the descending order.
pub fn rank_and_split(scores: &ScoreMap, rule: SplitRule) -> RankedResult {
    let ordered = sort_descending(scores);
    let cut = match rule {
        SplitRule::Threshold(threshold) => ordered
            .iter()
            .position(|scored| scored.weight <= threshold)
            .unwrap_or(ordered.len()),
        SplitRule::TopFraction(fraction) => {
            let cut = (fraction * ordered.len() as f64).ceil() as usize;
            cut.min(ordered.len())
        }
    };
    let mut positive = ordered;
    let negative = positive.split_off(cut);
    RankedResult { positive, negative }
}
