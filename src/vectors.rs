//! A sequence of vectors sharing one space. Used as matrix storage.

use crate::error::{ExprError, Result};
use crate::value::{Rank, Value};
use crate::vector::{Space, Vector};
use alloc::vec::Vec;
use core::ops::Index;
use serde::{Deserialize, Serialize};

/// Vectors that all live in `space`. Any vector stored here that comes from
/// the other space is transposed on the way in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vectors {
    vects: Vec<Vector>,
    inner_len: usize,
    space: Space,
    rank: Rank,
}

impl Vectors {
    /// `count` zero vectors of length `len`.
    pub fn new(space: Space, count: usize, len: usize) -> Self {
        Vectors {
            vects: (0..count).map(|_| Vector::new(space, len)).collect(),
            inner_len: len,
            space,
            rank: Rank::Real,
        }
    }

    pub fn from_vectors(space: Space, vects: Vec<Vector>) -> Self {
        let mut rank = Rank::Real;
        let mut inner_len = 0;
        let vects = vects
            .into_iter()
            .map(|mut vect| {
                rank = rank.max(vect.rank());
                inner_len = inner_len.max(vect.len());
                if vect.space() != space {
                    vect.trans();
                }
                vect
            })
            .collect();
        Vectors {
            vects,
            inner_len,
            space,
            rank,
        }
    }

    /// Widens `inner_len` to at least `len`, so an empty set still
    /// remembers the length its vectors would have.
    pub(crate) fn with_inner_len(mut self, len: usize) -> Self {
        self.inner_len = self.inner_len.max(len);
        self
    }

    pub fn len(&self) -> usize {
        self.vects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vects.is_empty()
    }

    /// Length of the longest stored vector.
    pub fn inner_len(&self) -> usize {
        self.inner_len
    }

    pub fn space(&self) -> Space {
        self.space
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn get(&self, index: usize) -> Option<&Vector> {
        self.vects.get(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Vector> {
        self.vects.iter()
    }

    pub fn as_slice(&self) -> &[Vector] {
        &self.vects
    }

    pub fn set(&mut self, index: usize, mut vect: Vector) -> Result<()> {
        let len = self.vects.len();
        if index >= len {
            return Err(ExprError::IndexOutOfBounds { index, len });
        }
        if vect.space() != self.space {
            vect.trans();
        }
        self.rank = self.rank.max(vect.rank());
        self.inner_len = self.inner_len.max(vect.len());
        self.vects[index] = vect;
        Ok(())
    }

    /// Sets element `j` of vector `i`.
    pub fn set_value(&mut self, i: usize, j: usize, value: Value) -> Result<()> {
        let len = self.vects.len();
        let vect = self
            .vects
            .get_mut(i)
            .ok_or(ExprError::IndexOutOfBounds { index: i, len })?;
        vect.set(j, value)?;
        self.rank = self.rank.max(value.rank());
        Ok(())
    }

    pub fn append(&mut self, mut vect: Vector) {
        if vect.space() != self.space {
            vect.trans();
        }
        self.rank = self.rank.max(vect.rank());
        self.inner_len = self.inner_len.max(vect.len());
        self.vects.push(vect);
    }

    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        let len = self.vects.len();
        for index in [i, j] {
            if index >= len {
                return Err(ExprError::IndexOutOfBounds { index, len });
            }
        }
        self.vects.swap(i, j);
        Ok(())
    }

    /// Copies the vectors from `start` to `finish`, both inclusive.
    pub fn subset(&self, start: usize, finish: usize) -> Result<Vectors> {
        let len = self.vects.len();
        if finish >= len {
            return Err(ExprError::IndexOutOfBounds { index: finish, len });
        }
        if start > finish {
            return Err(ExprError::IndexOutOfBounds {
                index: start,
                len: finish + 1,
            });
        }
        Ok(Vectors::from_vectors(
            self.space,
            self.vects[start..=finish].to_vec(),
        ))
    }

    /// Position of the first stored vector with the same elements as `vect`.
    pub fn index_of(&self, vect: &Vector) -> Option<usize> {
        self.vects
            .iter()
            .position(|candidate| candidate.elements().as_slice() == vect.elements().as_slice())
    }
}

impl Index<usize> for Vectors {
    type Output = Vector;

    fn index(&self, index: usize) -> &Vector {
        &self.vects[index]
    }
}
