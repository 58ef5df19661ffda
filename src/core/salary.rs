/// Estimates a single salary figure from an optional range.
///
/// A bound of zero is treated as missing: SuperJob reports unspecified
/// bounds as `0`.
pub fn predict_salary(salary_from: Option<f64>, salary_to: Option<f64>) -> Option<f64> {
    let salary_from = salary_from.filter(|value| *value != 0.0);
    let salary_to = salary_to.filter(|value| *value != 0.0);

    match (salary_from, salary_to) {
        (Some(from), Some(to)) => Some((from + to) / 2.0),
        (Some(from), None) => Some(from * 1.2),
        (None, Some(to)) => Some(to * 0.8),
        (None, None) => None,
    }
}

/// Returns the truncated mean and the number of salaries it was computed from.
pub fn average_salary(salaries: &[f64]) -> (Option<i64>, usize) {
    if salaries.is_empty() {
        return (None, 0);
    }

    let total: f64 = salaries.iter().sum();
    let average = (total / salaries.len() as f64).trunc() as i64;
    (Some(average), salaries.len())
}
