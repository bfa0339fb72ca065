//! Sparse Jacobians with diagonal blocks over a batch of nodes.
//!
//! Models in this crate evaluate `N` independent operating points at once.
//! An output at node `i` never depends on an input at node `j != i`, so every
//! `(output, input)` block of the Jacobian is an `N x N` diagonal matrix.
//! Only the declared blocks are stored, and only their diagonals.
//!
//! # Example
//!
//! ```
//! use heatpipe_models::support::partials::{DiagonalJacobian, Variable};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
//! struct Y;
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
//! struct X;
//!
//! impl Variable for Y {
//!     fn name(&self) -> &'static str { "y" }
//!     fn units(&self) -> &'static str { "m" }
//! }
//! impl Variable for X {
//!     fn name(&self) -> &'static str { "x" }
//!     fn units(&self) -> &'static str { "s" }
//! }
//!
//! // y = x^2 at x = [1, 2, 3]
//! let x = [1.0, 2.0, 3.0];
//! let jac = DiagonalJacobian::<Y, X, 3>::from_fn([(Y, X)], |_, _, node| 2.0 * x[node]);
//!
//! assert_eq!(jac.diagonal(Y, X), Some(&[2.0, 4.0, 6.0]));
//! assert_eq!(DiagonalJacobian::<Y, X, 3>::sparsity(), [0, 1, 2]);
//! ```

use std::collections::BTreeMap;

use ndarray::{Array1, Array2};

/// A named model variable, as seen by an optimization framework.
pub trait Variable {
    /// Returns the framework-facing variable name (e.g., `"R_wc"`).
    fn name(&self) -> &'static str;

    /// Returns the variable units in framework notation (e.g., `"K/W"`).
    ///
    /// Dimensionless variables return an empty string.
    fn units(&self) -> &'static str;
}

/// Jacobian of a batched model whose declared blocks are all diagonal.
///
/// `Of` identifies outputs and `Wrt` identifies inputs.
/// Entries are in `output / input`, using the units each [`Variable`] declares.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagonalJacobian<Of, Wrt, const N: usize> {
    blocks: BTreeMap<(Of, Wrt), [f64; N]>,
}

impl<Of, Wrt, const N: usize> DiagonalJacobian<Of, Wrt, N>
where
    Of: Copy + Ord,
    Wrt: Copy + Ord,
{
    /// Declares the given blocks and fills each diagonal entry with `f(of, wrt, node)`.
    ///
    /// Declaring the same pair twice keeps the last computed diagonal.
    pub fn from_fn(
        pairs: impl IntoIterator<Item = (Of, Wrt)>,
        mut f: impl FnMut(Of, Wrt, usize) -> f64,
    ) -> Self {
        let blocks = pairs
            .into_iter()
            .map(|(of, wrt)| {
                let diagonal = std::array::from_fn(|node| f(of, wrt, node));
                ((of, wrt), diagonal)
            })
            .collect();
        Self { blocks }
    }

    /// Row (and column) indices shared by every declared block: `0..N`.
    #[must_use]
    pub fn sparsity() -> [usize; N] {
        std::array::from_fn(|node| node)
    }

    /// Returns true if the `(of, wrt)` block is declared.
    #[must_use]
    pub fn is_declared(&self, of: Of, wrt: Wrt) -> bool {
        self.blocks.contains_key(&(of, wrt))
    }

    /// Returns the number of declared blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if no block is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterates over the declared `(of, wrt)` pairs in sorted order.
    pub fn pairs(&self) -> impl Iterator<Item = (Of, Wrt)> + '_ {
        self.blocks.keys().copied()
    }

    /// Returns the diagonal of a declared block.
    #[must_use]
    pub fn diagonal(&self, of: Of, wrt: Wrt) -> Option<&[f64; N]> {
        self.blocks.get(&(of, wrt))
    }

    /// Returns a single diagonal entry of a declared block.
    #[must_use]
    pub fn get(&self, of: Of, wrt: Wrt, node: usize) -> Option<f64> {
        self.diagonal(of, wrt)
            .and_then(|diagonal| diagonal.get(node).copied())
    }

    /// Returns a declared block as a dense `N x N` matrix.
    #[must_use]
    pub fn dense(&self, of: Of, wrt: Wrt) -> Option<Array2<f64>> {
        self.diagonal(of, wrt)
            .map(|diagonal| Array2::from_diag(&Array1::from_iter(diagonal.iter().copied())))
    }

    /// Iterates over the `(row, col, value)` entries of a declared block.
    ///
    /// Yields nothing if the block is not declared.
    pub fn triplets(&self, of: Of, wrt: Wrt) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.diagonal(of, wrt)
            .into_iter()
            .flat_map(|diagonal| diagonal.iter().enumerate())
            .map(|(node, &value)| (node, node, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Of {
        Area,
        Volume,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Wrt {
        Radius,
        Height,
    }

    /// Cylinder area `pi r^2` and volume `pi r^2 h` at two nodes.
    fn cylinder() -> DiagonalJacobian<Of, Wrt, 2> {
        let r = [1.0, 2.0];
        let h = [3.0, 5.0];
        DiagonalJacobian::from_fn(
            [
                (Of::Area, Wrt::Radius),
                (Of::Volume, Wrt::Radius),
                (Of::Volume, Wrt::Height),
            ],
            |of, wrt, i| match (of, wrt) {
                (Of::Area, Wrt::Radius) => 2.0 * r[i],
                (Of::Volume, Wrt::Radius) => 2.0 * r[i] * h[i],
                (Of::Volume, Wrt::Height) => r[i] * r[i],
                (Of::Area, Wrt::Height) => 0.0,
            },
        )
    }

    #[test]
    fn declared_blocks_only() {
        let jac = cylinder();

        assert_eq!(jac.len(), 3);
        assert!(jac.is_declared(Of::Volume, Wrt::Height));
        assert!(!jac.is_declared(Of::Area, Wrt::Height));
        assert_eq!(jac.diagonal(Of::Area, Wrt::Height), None);
        assert_eq!(jac.get(Of::Volume, Wrt::Radius, 1), Some(20.0));
        assert_eq!(jac.get(Of::Volume, Wrt::Radius, 2), None);
    }

    #[test]
    fn dense_block_is_diagonal() {
        let jac = cylinder();
        let dense = jac.dense(Of::Volume, Wrt::Height).unwrap();

        assert_eq!(dense.dim(), (2, 2));
        assert_eq!(dense[[0, 0]], 1.0);
        assert_eq!(dense[[1, 1]], 4.0);
        assert_eq!(dense[[0, 1]], 0.0);
        assert_eq!(dense[[1, 0]], 0.0);
    }

    #[test]
    fn triplets_follow_sparsity() {
        let jac = cylinder();
        let triplets: Vec<_> = jac.triplets(Of::Area, Wrt::Radius).collect();

        assert_eq!(triplets, vec![(0, 0, 2.0), (1, 1, 4.0)]);
        assert_eq!(jac.triplets(Of::Area, Wrt::Height).count(), 0);
        assert_eq!(DiagonalJacobian::<Of, Wrt, 2>::sparsity(), [0, 1]);
    }

    #[test]
    fn pairs_are_sorted() {
        let jac = cylinder();
        let pairs: Vec<_> = jac.pairs().collect();

        assert_eq!(
            pairs,
            vec![
                (Of::Area, Wrt::Radius),
                (Of::Volume, Wrt::Radius),
                (Of::Volume, Wrt::Height),
            ]
        );
    }
}
