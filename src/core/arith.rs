use crate::domain::model::ListStats;

pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

/// Total, mean, max and min over a slice of integers. The empty-input branch
/// guards the division, so this never fails.
pub fn summarize(items: &[i64]) -> ListStats {
    if items.is_empty() {
        return ListStats::empty();
    }

    let total: i64 = items.iter().sum();
    ListStats {
        total,
        average: total as f64 / items.len() as f64,
        max: items.iter().copied().max(),
        min: items.iter().copied().min(),
    }
}
