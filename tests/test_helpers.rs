use exp_algebra::{Argument, Matrix, Real, Vector};

/// Real parts of a vector result, for compact comparisons
#[allow(dead_code)]
pub fn real_parts(result: &Argument) -> Vec<Real> {
    result
        .vector()
        .expect("result should be a vector")
        .iter()
        .map(|value| value.real())
        .collect()
}

/// Real parts of a matrix result, row by row
#[allow(dead_code)]
pub fn matrix_real_parts(result: &Argument) -> Vec<Vec<Real>> {
    let matrix = result.matrix().expect("result should be a matrix");
    matrix
        .elements()
        .iter()
        .map(|row| row.iter().map(|value| value.real()).collect())
        .collect()
}

/// Build a matrix from rows of reals
#[allow(dead_code)]
pub fn matrix_from(rows: &[&[Real]]) -> Matrix {
    Matrix::from_rows(rows.iter().map(|row| Vector::row(row.iter().copied())).collect())
        .expect("rows should have equal length")
}

/// Scalar result as a real number
#[allow(dead_code)]
pub fn real(result: &Argument) -> Real {
    result.value().expect("result should be a scalar").real()
}
