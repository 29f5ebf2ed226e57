//! Dashboard aggregation over a topics + categories snapshot.
//!
//! Each top-level category owns the topics labelled with its own name or any
//! descendant's name. Every topic lands in exactly one bucket: labels that are
//! blank or match no category fall into the uncategorized bucket, and a label
//! shared by several subtrees belongs to the first root in arena order.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::collections::HashMap;

use schema::Topic;
use serde::Serialize;

use crate::sample;
use crate::tree::CategoryArena;

/// Bucket label for topics without a matching category.
pub const UNCATEGORIZED: &str = "미분류";

/// Topic count of one top-level category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryStat {
    pub category: String,
    pub count: usize,
    /// Share of all topics, rounded to the nearest whole percent.
    pub percentage: u32,
}

/// Headline figures shown on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_topics: usize,
    pub total_students: usize,
    pub current_generation: u32,
    pub category_stats: Vec<CategoryStat>,
}

impl DashboardStats {
    /// Aggregate a fresh snapshot.
    #[must_use]
    pub fn compute(topics: &[Topic], arena: &CategoryArena) -> Self {
        Self {
            total_topics: topics.len(),
            total_students: sample::TOTAL_STUDENTS,
            current_generation: sample::CURRENT_GENERATION,
            category_stats: category_stats(topics, arena),
        }
    }
}

/// `count / total` as a whole percent, rounding halves up. Zero when `total` is zero.
#[must_use]
pub fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let rounded = (count.saturating_mul(200) + total) / total.saturating_mul(2);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Per-root topic counts, highest first, empty buckets omitted.
#[must_use]
pub fn category_stats(topics: &[Topic], arena: &CategoryArena) -> Vec<CategoryStat> {
    let roots = arena.roots();

    // First root wins when the same name appears under several subtrees.
    let mut owner: HashMap<&str, usize> = HashMap::new();
    for (slot, root) in roots.iter().enumerate() {
        for name in arena.subtree_names(root.id) {
            owner.entry(name).or_insert(slot);
        }
    }

    let mut counts = vec![0_usize; roots.len()];
    let mut uncategorized = 0_usize;
    for topic in topics {
        let label = topic.category.as_deref().filter(|c| !c.trim().is_empty());
        match label.and_then(|c| owner.get(c)) {
            Some(&slot) => counts[slot] += 1,
            None => uncategorized += 1,
        }
    }

    let total = topics.len();
    let mut stats = roots
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(root, count)| CategoryStat {
            category: root.name.clone(),
            count,
            percentage: percentage(count, total),
        })
        .collect::<Vec<_>>();

    if uncategorized > 0 {
        stats.push(CategoryStat {
            category: UNCATEGORIZED.to_owned(),
            count: uncategorized,
            percentage: percentage(uncategorized, total),
        });
    }

    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}
