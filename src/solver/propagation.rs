use crate::solver::variable::VariableId;

/// One domain pruning: `value` was removed from `variable`'s domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reduction {
    pub variable: VariableId,
    pub value: i32,
}

/// The record of a single forward-checking wave.
///
/// Reductions appear in the order they were applied, and every reduction is
/// logged before the value leaves the domain, so walking the log backwards
/// or forwards restores the exact pre-propagation state. Rollback is driven
/// by the log alone: an invalid propagation is undone the same way a valid
/// one is, using whatever partial log it accumulated.
#[derive(Debug, Clone)]
pub struct Propagation {
    reductions: Vec<Reduction>,
    valid: bool,
}

impl Propagation {
    pub(crate) fn new() -> Self {
        Propagation {
            reductions: Vec::new(),
            valid: true,
        }
    }

    /// False when a domain was emptied or an assigned variable's held value
    /// was eliminated; the assignment that triggered this wave cannot stand.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn reductions(&self) -> &[Reduction] {
        &self.reductions
    }

    pub(crate) fn record(&mut self, variable: VariableId, value: i32) {
        self.reductions.push(Reduction { variable, value });
    }

    pub(crate) fn invalidate(&mut self) {
        self.valid = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_valid_and_empty() {
        let propagation = Propagation::new();
        assert!(propagation.is_valid());
        assert!(propagation.reductions().is_empty());
    }

    #[test]
    fn records_in_order() {
        let mut propagation = Propagation::new();
        propagation.record(3, 7);
        propagation.record(1, 2);
        assert_eq!(
            propagation.reductions(),
            &[
                Reduction { variable: 3, value: 7 },
                Reduction { variable: 1, value: 2 },
            ]
        );
    }

    #[test]
    fn invalidate_is_sticky() {
        let mut propagation = Propagation::new();
        propagation.invalidate();
        propagation.record(0, 1);
        assert!(!propagation.is_valid());
    }
}
