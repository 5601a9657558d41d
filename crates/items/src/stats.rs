//! Catalog statistics: totals, average price and a per-category breakdown.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// Per-category slice of [`StatsResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub category: String,
    pub count: usize,
    pub average_price: f64,
}

/// Aggregate view over the whole catalog.
///
/// `categories` follows the order in which each category is first seen and
/// the counts always sum to `total`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResult {
    pub total: usize,
    pub average_price: f64,
    pub categories: Vec<CategoryStats>,
}

/// Round to 2 decimal places, ties away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn average(sum: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { round2(sum / count as f64) }
}

pub fn aggregate(items: &[Item]) -> StatsResult {
    // (category, count, sum) in first-seen order; catalogs are small enough
    // that a linear scan beats keeping a side index.
    let mut groups: Vec<(Cow<'_, str>, usize, f64)> = Vec::new();
    let mut sum = 0.0;

    for item in items {
        let price = item.price_value();
        sum += price;

        let key = item.category_key();
        match groups.iter_mut().find(|(category, _, _)| *category == key) {
            Some((_, count, group_sum)) => {
                *count += 1;
                *group_sum += price;
            }
            None => groups.push((key, 1, price)),
        }
    }

    StatsResult {
        total: items.len(),
        average_price: average(sum, items.len()),
        categories: groups
            .into_iter()
            .map(|(category, count, group_sum)| CategoryStats {
                category: category.into_owned(),
                count,
                average_price: average(group_sum, count),
            })
            .collect(),
    }
}
