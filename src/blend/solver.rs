//! Sparse Cholesky factorization shared by the three channel solves.
use log::{debug, warn};
use nalgebra::{DMatrix, DVector};
use nalgebra_sparse::factorization::CscCholesky;
use nalgebra_sparse::{CooMatrix, CscMatrix};

/// Why a factorization or solve was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// The matrix is not symmetric positive definite.
    NotPositiveDefinite,
    /// The right-hand side length differs from the system size.
    DimensionMismatch { expected: usize, found: usize },
    /// The solution contains NaN or infinite entries.
    NonFinite,
}

/// One-time factorization of the coefficient matrix.
pub struct FactoredSystem {
    cholesky: CscCholesky<f64>,
    unknowns: usize,
    nonzeros: usize,
}

impl FactoredSystem {
    /// Convert the triplets to CSC (summing duplicates) and factorize.
    pub fn factorize(matrix: &CooMatrix<f64>) -> Result<Self, SolveError> {
        let csc = CscMatrix::from(matrix);
        let unknowns = csc.nrows();
        let nonzeros = csc.nnz();
        let cholesky = CscCholesky::factor(&csc).map_err(|err| {
            warn!("Cholesky factorization of {unknowns}x{unknowns} system failed: {err:?}");
            SolveError::NotPositiveDefinite
        })?;
        debug!("factorized {unknowns}x{unknowns} system with {nonzeros} non-zeros");
        Ok(Self {
            cholesky,
            unknowns,
            nonzeros,
        })
    }

    /// System size `N`.
    pub fn unknowns(&self) -> usize {
        self.unknowns
    }

    /// Stored entries of the coefficient matrix.
    pub fn nonzeros(&self) -> usize {
        self.nonzeros
    }

    /// Solve `A x = b` with the cached factor.
    pub fn solve(&self, b: &DVector<f64>) -> Result<DVector<f64>, SolveError> {
        if b.len() != self.unknowns {
            return Err(SolveError::DimensionMismatch {
                expected: self.unknowns,
                found: b.len(),
            });
        }
        let mut x = DMatrix::from_column_slice(self.unknowns, 1, b.as_slice());
        self.cholesky.solve_mut(&mut x);
        if x.iter().any(|v| !v.is_finite()) {
            return Err(SolveError::NonFinite);
        }
        Ok(DVector::from_column_slice(x.as_slice()))
    }
}
