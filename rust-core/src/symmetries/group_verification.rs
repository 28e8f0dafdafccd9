// Closure tests over a finite set of symmetry operators
//
// Every ordered pair (a, b) is composed and the product looked up in the set.
// This is O(n^3): a 192-operator space group needs about 7M comparisons.

use log::{debug, trace};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::SYMMETRY_TOLERANCE;
use crate::errors::{SymmetryError, SymmetryResult};
use crate::symmetries::affine_transform::AffineTransform;
use crate::symmetries::symmetry_group::{index_of, SymmetryGroup};

impl SymmetryGroup {
    /// Do the operators form a group?
    ///
    /// Normalizes `self` in place first. Products are NOT normalized, so a
    /// product that only matches a member up to a lattice translation fails
    /// the test (see [`SymmetryGroup::is_space_group`]).
    ///
    /// # Errors
    /// [`SymmetryError::Underspecified`] for an empty group.
    pub fn is_group(&mut self) -> SymmetryResult<bool> {
        ensure_not_empty(self, "is_group")?;
        self.normalize_crystallographically();
        Ok(is_closed(self.transforms(), false, SYMMETRY_TOLERANCE))
    }

    /// Do the operators form a space group (closure modulo lattice translations)?
    ///
    /// Works on a normalized copy, so `self` is left untouched. Each product
    /// is normalized before it is looked up.
    ///
    /// # Errors
    /// [`SymmetryError::Underspecified`] for an empty group.
    pub fn is_space_group(&self) -> SymmetryResult<bool> {
        ensure_not_empty(self, "is_space_group")?;
        let mut copy = self.clone();
        copy.normalize_crystallographically();
        Ok(is_closed(copy.transforms(), true, SYMMETRY_TOLERANCE))
    }
}

fn ensure_not_empty(group: &SymmetryGroup, operation: &str) -> SymmetryResult<()> {
    if group.is_empty() {
        return Err(SymmetryError::underspecified(format!(
            "{} needs at least one operator",
            operation
        )));
    }
    Ok(())
}

#[cfg(not(feature = "parallel"))]
fn is_closed(transforms: &[AffineTransform], normalize_products: bool, eps: f64) -> bool {
    transforms
        .iter()
        .enumerate()
        .all(|(i, a)| row_is_closed(i, a, transforms, normalize_products, eps))
}

#[cfg(feature = "parallel")]
fn is_closed(transforms: &[AffineTransform], normalize_products: bool, eps: f64) -> bool {
    transforms
        .par_iter()
        .enumerate()
        .all(|(i, a)| row_is_closed(i, a, transforms, normalize_products, eps))
}

// All products a * b for a fixed left operand
fn row_is_closed(
    i: usize,
    a: &AffineTransform,
    transforms: &[AffineTransform],
    normalize_products: bool,
    eps: f64,
) -> bool {
    for (j, b) in transforms.iter().enumerate() {
        let mut product = a.concatenate(b);
        if normalize_products {
            product.normalize_crystallographically();
        }
        if index_of(transforms, &product, eps).is_none() {
            debug!(
                "operators {} ({}) and {} ({}) do not generate a group element: {}",
                i, a, j, b, product
            );
            return false;
        }
        trace!("{} * {} = {}", i, j, product);
    }
    true
}
