use super::types::{CategoryScore, MetricOutcome, Score};
use crate::catalog::Category;

/// Arithmetic mean of the scored outcomes. Missing and unreadable metrics are
/// left out of both sum and count; a category with nothing scorable averages
/// to 0.
pub fn category_average<'a, I>(category: Category, outcomes: I) -> CategoryScore
where
    I: IntoIterator<Item = &'a MetricOutcome>,
{
    let mut total = 0.0;
    let mut scored = 0usize;
    let mut excluded = 0usize;

    for outcome in outcomes {
        match outcome.score() {
            Some(s) => {
                total += s.value();
                scored += 1;
            }
            None => excluded += 1,
        }
    }

    let score = if scored > 0 {
        Score::clamped(total / scored as f64)
    } else {
        Score::MIN
    };

    CategoryScore {
        category,
        score,
        scored,
        excluded,
    }
}
