use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::SYMMETRY_TOLERANCE;
use crate::errors::SymmetryResult;
use crate::symmetries::affine_transform::AffineTransform;
use crate::symmetries::centering::{classify_centering, Centering};

/// An ordered set of symmetry operators.
///
/// Insertion order is kept but carries no meaning for equality. Each group
/// owns its operators; cloning or deriving a group copies them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SymmetryGroup {
    transforms: Vec<AffineTransform>,
}

impl SymmetryGroup {
    /// Create an empty group
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a list of operators. Validity (closure, duplicates) is not checked.
    pub fn from_transforms(transforms: Vec<AffineTransform>) -> Self {
        Self { transforms }
    }

    /// Create from algebraic operator strings, e.g. the Pbca list
    /// `["x,y,z", "-x+1/2,-y,z+1/2", ...]`.
    ///
    /// # Errors
    /// The first string that fails to parse aborts construction.
    pub fn from_xyz_strings<I, S>(xyz: I) -> SymmetryResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let transforms = xyz
            .into_iter()
            .map(|s| AffineTransform::parse(s.as_ref()))
            .collect::<SymmetryResult<Vec<_>>>()?;
        Ok(Self { transforms })
    }

    pub fn transforms(&self) -> &[AffineTransform] {
        &self.transforms
    }

    pub fn into_transforms(self) -> Vec<AffineTransform> {
        self.transforms
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AffineTransform> {
        self.transforms.iter()
    }

    /// Operators rendered as algebraic triplets, in group order
    pub fn to_xyz_strings(&self) -> Vec<String> {
        self.transforms.iter().map(AffineTransform::to_xyz).collect()
    }

    /// Index of the first operator tolerance-equal to `transform`
    pub fn index_of(&self, transform: &AffineTransform, eps: f64) -> Option<usize> {
        index_of(&self.transforms, transform, eps)
    }

    /// Product of two groups.
    ///
    /// Every `self[i].concatenate(other[j])` is formed (outer loop over `self`)
    /// and kept only if no tolerance-equal product was kept before. The
    /// duplicate scan runs against the growing result, so cost is quadratic in
    /// the product size.
    pub fn convolute(&self, other: &SymmetryGroup) -> SymmetryGroup {
        let mut products: Vec<AffineTransform> = Vec::new();
        for a in &self.transforms {
            for b in &other.transforms {
                let product = a.concatenate(b);
                if index_of(&products, &product, SYMMETRY_TOLERANCE).is_none() {
                    products.push(product);
                }
            }
        }
        debug!(
            "convolution of {} x {} operators gave {} distinct products",
            self.len(),
            other.len(),
            products.len()
        );
        SymmetryGroup::from_transforms(products)
    }

    /// Order-independent comparison.
    ///
    /// Groups are equal when they have the same size and every operator of
    /// `self` has a tolerance-equal operator in `other`. Matching is
    /// first-found rather than one-to-one, so two near-duplicates in `self`
    /// may both match the same operator of `other`.
    pub fn is_equal_to(&self, other: &SymmetryGroup, eps: f64) -> bool {
        self.len() == other.len()
            && self
                .transforms
                .iter()
                .all(|t| index_of(&other.transforms, t, eps).is_some())
    }

    /// Normalize every operator in place (see [`AffineTransform::normalize_crystallographically`])
    pub fn normalize_crystallographically(&mut self) {
        for t in self.transforms.iter_mut() {
            t.normalize_crystallographically();
        }
    }

    /// Copies of the pure-translation operators, excluding the identity.
    ///
    /// These are the centering translations of the cell.
    pub fn pure_translations(&self) -> Vec<AffineTransform> {
        self.transforms
            .iter()
            .filter(|t| t.is_pure_translation() && !t.is_unit())
            .cloned()
            .collect()
    }

    /// Operators without translation, excluding the identity.
    ///
    /// The result is not necessarily a group but holds point-group generators.
    pub fn non_translations(&self) -> SymmetryGroup {
        let transforms = self
            .transforms
            .iter()
            .filter(|t| !t.has_non_zero_translation_component() && !t.is_unit())
            .cloned()
            .collect();
        SymmetryGroup::from_transforms(transforms)
    }

    /// Lattice centering implied by the pure translations
    pub fn centering(&self) -> Centering {
        classify_centering(&self.pure_translations())
    }
}

impl<'a> IntoIterator for &'a SymmetryGroup {
    type Item = &'a AffineTransform;
    type IntoIter = std::slice::Iter<'a, AffineTransform>;

    fn into_iter(self) -> Self::IntoIter {
        self.transforms.iter()
    }
}

impl From<Vec<AffineTransform>> for SymmetryGroup {
    fn from(transforms: Vec<AffineTransform>) -> Self {
        Self::from_transforms(transforms)
    }
}

pub(crate) fn index_of(list: &[AffineTransform], transform: &AffineTransform, eps: f64) -> Option<usize> {
    list.iter().position(|t| t.is_equal_to(transform, eps))
}
