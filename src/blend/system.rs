//! Coefficient matrix of the discrete Poisson equation.
//!
//! Row `i` belongs to unknown `i` and encodes the 5-point Laplacian:
//! `4` on the diagonal and `-1` for every 4-neighbor that is itself an
//! unknown. Neighbors outside the mask interior carry known target values and
//! are folded into the right-hand side instead (see [`super::rhs`]).
//!
//! The diagonal is always 4 because placement validation keeps every interior
//! pixel off the target border, so all four grid neighbors exist.
use super::mask::{MaskIndex, Neighbor};
use nalgebra_sparse::CooMatrix;

/// Diagonal entry `|N_p|` of every row.
pub const STENCIL_DIAGONAL: f64 = 4.0;
/// Coupling between two adjacent unknowns.
pub const STENCIL_NEIGHBOR: f64 = -1.0;

/// Assemble the N×N system matrix in triplet form.
///
/// Iterates interior pixels in index order, so triplet rows appear in
/// ascending order. The result is symmetric: adjacency is mutual.
pub fn assemble_matrix(index: &MaskIndex) -> CooMatrix<f64> {
    let n = index.len();
    let mut coo = CooMatrix::new(n, n);
    for (row, &(x, y)) in index.pixels().iter().enumerate() {
        coo.push(row, row, STENCIL_DIAGONAL);
        for neighbor in Neighbor::ALL {
            let (nx, ny) = neighbor.of(x, y);
            if let Some(col) = index.index_of(nx, ny) {
                coo.push(row, col, STENCIL_NEIGHBOR);
            }
        }
    }
    coo
}
