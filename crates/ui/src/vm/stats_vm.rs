use flash_core::model::StatsStore;

/// Lines of the running totals panel.
#[must_use]
pub fn map_totals(stats: &StatsStore) -> Vec<String> {
    let totals = stats.totals();
    vec![
        format!("Total Questions: {}", totals.questions),
        format!("Questions Right: {}", totals.right),
        format!("Questions Wrong: {}", totals.wrong),
        format!("Questions Skipped: {}", totals.skip),
    ]
}
