use std::time::Duration;

use prettytable::{Cell, Row, Table};
use serde::Serialize;

use crate::solver::model::Model;

/// Counters collected while solving. Observational only: nothing in the
/// search reads them back, and repeated runs on one searcher accumulate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchStatistics {
    /// Assignment attempts, including fixpoint-forced bindings.
    pub total_assignments: u64,
    /// Rolled-back attempts.
    pub backtracks: u64,
    /// Wall-clock time spent inside `solve`.
    pub elapsed: Duration,
}

/// Renders the statistics as a one-row table.
pub fn render_stats_table(stats: &SearchStatistics) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Assignments"),
        Cell::new("Backtracks"),
        Cell::new("Elapsed (ms)"),
    ]));
    table.add_row(Row::new(vec![
        Cell::new(&stats.total_assignments.to_string()),
        Cell::new(&stats.backtracks.to_string()),
        Cell::new(&format!("{:.2}", stats.elapsed.as_secs_f64() * 1000.0)),
    ]));
    table.to_string()
}

/// Renders every variable with its remaining domain and current value.
pub fn render_model_table(model: &Model) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Variable"),
        Cell::new("Domain"),
        Cell::new("Value"),
    ]));
    for variable in model.variables() {
        let domain = variable
            .domain()
            .sorted_values()
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let value = match variable.value() {
            Some(value) => value.to_string(),
            None => "-".to_owned(),
        };
        table.add_row(Row::new(vec![
            Cell::new(variable.name()),
            Cell::new(&domain),
            Cell::new(&value),
        ]));
    }
    table.to_string()
}
