use crate::error::{ModelError, Result};

/// The truth values understood by the boolean feature-model constraints.
pub const ON: i32 = 1;
pub const OFF: i32 = 0;

/// An owned set of candidate values for one variable.
///
/// Domains are templates: attaching one to a variable copies it value-wise,
/// so many variables can be seeded from a single declaration without ever
/// sharing storage. Construction rejects duplicate values; the set stays
/// duplicate-free through every remove/restore cycle afterwards.
#[derive(Debug, Clone)]
pub struct Domain {
    values: Vec<i32>,
    boolean: bool,
}

impl Domain {
    /// Builds a domain from the given candidates, failing on duplicates.
    pub fn new(values: impl IntoIterator<Item = i32>) -> Result<Self> {
        let mut out = Vec::new();
        for value in values {
            if out.contains(&value) {
                return Err(ModelError::DuplicateDomainValue { value });
            }
            out.push(value);
        }
        Ok(Domain {
            values: out,
            boolean: false,
        })
    }

    /// The `{0, 1}` domain used by the feature-model constraints.
    ///
    /// Boolean-ness is a property of this template, not of the current
    /// contents, so a variable stays eligible for boolean constraints even
    /// after pre-assignment has removed one of the two values.
    pub fn boolean() -> Self {
        Domain {
            values: vec![OFF, ON],
            boolean: true,
        }
    }

    pub fn is_boolean(&self) -> bool {
        self.boolean
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, value: i32) -> bool {
        self.values.contains(&value)
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.values.iter().copied()
    }

    /// The remaining candidates in ascending order.
    pub fn sorted_values(&self) -> Vec<i32> {
        let mut values = self.values.clone();
        values.sort_unstable();
        values
    }

    /// Removes a candidate, reporting whether it was present. Internal order
    /// is not preserved; only set membership matters.
    pub(crate) fn remove(&mut self, value: i32) -> bool {
        match self.values.iter().position(|&v| v == value) {
            Some(index) => {
                self.values.swap_remove(index);
                true
            }
            None => false,
        }
    }

    /// Puts a previously removed candidate back.
    pub(crate) fn restore(&mut self, value: i32) {
        if !self.contains(value) {
            self.values.push(value);
        }
    }
}

impl PartialEq for Domain {
    fn eq(&self, other: &Self) -> bool {
        self.boolean == other.boolean && self.sorted_values() == other.sorted_values()
    }
}

impl Eq for Domain {}
