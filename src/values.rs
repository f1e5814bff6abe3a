//! Insertion-ordered sequences of values.

use crate::error::{ExprError, Result};
use crate::value::{Rank, Value};
use alloc::vec::Vec;
use core::ops::Index;
use serde::{Deserialize, Serialize};

/// An index-addressable, growable list of [`Value`]s.
///
/// The sequence remembers the highest rank it has held. The rank only ever
/// goes up: overwriting the last complex element with a real one keeps the
/// sequence `Complex`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Values {
    items: Vec<Value>,
    rank: Rank,
}

impl Values {
    /// A zero-filled sequence of `len` values.
    pub fn new(len: usize) -> Self {
        Values {
            items: alloc::vec![Value::ZERO; len],
            rank: Rank::Real,
        }
    }

    pub fn from_vec(items: Vec<Value>) -> Self {
        let rank = items.iter().map(Value::rank).max().unwrap_or_default();
        Values { items, rank }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn set(&mut self, index: usize, value: Value) -> Result<()> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or(ExprError::IndexOutOfBounds { index, len })?;
        *slot = value;
        self.rank = self.rank.max(value.rank());
        Ok(())
    }

    pub fn append(&mut self, value: Value) {
        self.rank = self.rank.max(value.rank());
        self.items.push(value);
    }

    /// Copies the elements from `start` to `finish`, both inclusive.
    pub fn subset(&self, start: usize, finish: usize) -> Result<Values> {
        if finish >= self.items.len() {
            return Err(ExprError::IndexOutOfBounds {
                index: finish,
                len: self.items.len(),
            });
        }
        if start > finish {
            return Err(ExprError::IndexOutOfBounds {
                index: start,
                len: finish + 1,
            });
        }
        Ok(Values::from_vec(self.items[start..=finish].to_vec()))
    }

    /// Position of the first element equal to `value`.
    pub fn index_of(&self, value: &Value) -> Option<usize> {
        self.items.iter().position(|item| item == value)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }
}

impl Index<usize> for Values {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.items[index]
    }
}

impl<V: Into<Value>> FromIterator<V> for Values {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Values::from_vec(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a Values {
    type Item = &'a Value;
    type IntoIter = core::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zero_filled_and_real() {
        let values = Values::new(3);
        assert_eq!(values.len(), 3);
        assert!(values.iter().all(Value::is_zero));
        assert_eq!(values.rank(), Rank::Real);
    }

    #[test]
    fn test_rank_never_decreases() {
        let mut values = Values::new(2);
        values.set(0, Value::new(1.0, 1.0)).unwrap();
        assert_eq!(values.rank(), Rank::Complex);
        values.set(0, Value::from(1)).unwrap();
        assert_eq!(values.rank(), Rank::Complex);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut values = Values::new(2);
        assert_eq!(
            values.set(2, Value::ONE),
            Err(ExprError::IndexOutOfBounds { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_append_subset_and_index_of() {
        let mut values: Values = [1, 2, 3].into_iter().collect();
        values.append(Value::new(4.0, 1.0));
        assert_eq!(values.len(), 4);
        assert_eq!(values.rank(), Rank::Complex);

        let subset = values.subset(1, 2).unwrap();
        assert_eq!(subset.as_slice(), &[Value::from(2), Value::from(3)]);
        assert_eq!(subset.rank(), Rank::Real);
        assert!(values.subset(2, 4).is_err());

        assert_eq!(values.index_of(&Value::from(3)), Some(2));
        assert_eq!(values.index_of(&Value::from(9)), None);
    }

    #[test]
    fn test_clone_is_independent() {
        let original: Values = [1, 2].into_iter().collect();
        let mut copy = original.clone();
        copy.set(0, Value::from(7)).unwrap();
        assert_eq!(original[0], Value::from(1));
    }
}
