//! Row and column vectors.

use crate::error::{ExprError, Result, Shape};
use crate::functions;
use crate::value::{Rank, Value};
use crate::values::Values;
use core::fmt;
use core::ops::Index;
use serde::{Deserialize, Serialize};

/// The space a vector lives in. Controls which products are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Space {
    Row,
    Column,
}

impl Space {
    pub fn flipped(self) -> Space {
        match self {
            Space::Row => Space::Column,
            Space::Column => Space::Row,
        }
    }
}

/// An ordered sequence of values tagged with a [`Space`].
///
/// `trans`, `conj`, `conj_trans`, `set` and `append` mutate in place; the
/// `transposed`/`conjugated`/`conj_transposed` helpers return deep copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    space: Space,
    elements: Values,
    rank: Rank,
}

impl Vector {
    /// Zero vector of `len` elements.
    pub fn new(space: Space, len: usize) -> Self {
        Vector {
            space,
            elements: Values::new(len),
            rank: Rank::Real,
        }
    }

    pub fn from_values(space: Space, elements: Values) -> Self {
        let rank = elements.rank();
        Vector {
            space,
            elements,
            rank,
        }
    }

    pub fn make<I, V>(space: Space, elements: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Vector::from_values(space, elements.into_iter().collect())
    }

    pub fn row<I, V>(elements: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Vector::make(Space::Row, elements)
    }

    pub fn column<I, V>(elements: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Vector::make(Space::Column, elements)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn space(&self) -> Space {
        self.space
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn shape(&self) -> Shape {
        match self.space {
            Space::Row => (1, self.len()),
            Space::Column => (self.len(), 1),
        }
    }

    pub fn elements(&self) -> &Values {
        &self.elements
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elements.get(index)
    }

    pub fn set(&mut self, index: usize, value: Value) -> Result<()> {
        self.elements.set(index, value)?;
        self.rank = self.rank.max(value.rank());
        Ok(())
    }

    pub fn append(&mut self, value: Value) {
        self.elements.append(value);
        self.rank = self.rank.max(value.rank());
    }

    pub fn index_of(&self, value: &Value) -> Option<usize> {
        self.elements.index_of(value)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Value> {
        self.elements.iter()
    }

    /// Flips the space. Elements are untouched.
    pub fn trans(&mut self) {
        self.space = self.space.flipped();
    }

    pub fn conj(&mut self) {
        if self.rank != Rank::Complex {
            return;
        }
        self.elements = self.elements.iter().map(|v| functions::conj(*v)).collect();
    }

    pub fn conj_trans(&mut self) {
        self.conj();
        self.trans();
    }

    pub fn transposed(&self) -> Vector {
        let mut copy = self.clone();
        copy.trans();
        copy
    }

    pub fn conjugated(&self) -> Vector {
        let mut copy = self.clone();
        copy.conj();
        copy
    }

    pub fn conj_transposed(&self) -> Vector {
        let mut copy = self.clone();
        copy.conj_trans();
        copy
    }

    /// `sqrt(sum(v_i * conj(v_i)))`
    pub fn norm(&self) -> Value {
        let dot = self.iter().fold(Value::ZERO, |acc, v| {
            functions::add(acc, functions::mul(*v, functions::conj(*v)))
        });
        functions::sqrt(dot)
    }

    pub fn unit(&self) -> Result<Vector> {
        let norm = self.norm();
        if norm.is_zero() {
            return Err(ExprError::ZeroNorm);
        }
        let elements = self.iter().map(|v| functions::div(*v, norm)).collect();
        Ok(Vector::from_values(self.space, elements))
    }
}

impl Index<usize> for Vector {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.elements[index]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")?;
        if self.space == Space::Column {
            write!(f, "'")?;
        }
        Ok(())
    }
}
