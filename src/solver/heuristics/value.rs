use crate::solver::model::Model;
use crate::solver::variable::VariableId;

/// Value-ordering strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValueOrder {
    /// Ascending candidate order.
    #[default]
    Lexicographic,
    /// Least constraining first: candidates that fewer unassigned peers are
    /// still counting on come first, so each attempt disturbs the rest of
    /// the network as little as possible. Ties fall back to ascending
    /// value, keeping the order deterministic.
    LeastConstraining,
}

/// Orders the remaining candidates of `variable` for the search to try.
///
/// Returns a snapshot: the search mutates the domain while iterating, so
/// the candidates are copied out up front.
pub fn order_values(model: &Model, variable: VariableId, order: ValueOrder) -> Vec<i32> {
    match order {
        ValueOrder::Lexicographic => model.variable(variable).domain().sorted_values(),
        ValueOrder::LeastConstraining => {
            let mut values = model.variable(variable).domain().sorted_values();
            // Stable sort over an ascending base gives the value tie-break
            // for free.
            values.sort_by_key(|&value| peer_support(model, variable, value));
            values
        }
    }
}

/// How many unassigned peers, across every constraint containing
/// `variable`, still have `value` as a candidate. A peer sharing several
/// constraints with the variable is counted once per shared constraint.
fn peer_support(model: &Model, variable: VariableId, value: i32) -> usize {
    let mut count = 0;
    for &cid in model.constraints_on(variable) {
        for &peer in model.constraint(cid).variables() {
            if peer == variable {
                continue;
            }
            let peer_variable = model.variable(peer);
            if !peer_variable.is_assigned() && peer_variable.domain().contains(value) {
                count += 1;
            }
        }
    }
    count
}
