//! The product catalog: a fixed ordered list of products and prices.
//!
//! Index 0 is reserved as the sentinel "Return Credit" selection; real
//! products occupy indices 1 and up. The catalog is fixed at construction
//! and immutable thereafter; there is no runtime mutation.

mod builder;
mod error;

pub use builder::{BuildError, CatalogBuilder};
pub use error::CatalogError;

use serde::{Deserialize, Serialize};

/// A single catalog entry.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Product {
    /// Position in the catalog; 0 is the reserved return slot.
    pub index: usize,
    /// Price in credit units; 0 only for the return slot.
    pub price: u32,
}

impl Product {
    /// The reserved index-0 "Return Credit" entry.
    pub fn return_slot() -> Self {
        Self { index: 0, price: 0 }
    }
}

/// An ordered, fixed-size sequence of products.
///
/// All queries are pure. `price` surfaces [`CatalogError::OutOfRange`]
/// for indices outside the catalog rather than clamping; `next` and
/// `covers` are total.
///
/// # Example
///
/// ```rust
/// use vendo::catalog::Catalog;
///
/// let catalog = Catalog::standard();
/// assert_eq!(catalog.len(), 4);
/// assert_eq!(catalog.price(3).unwrap(), 3);
/// assert_eq!(catalog.next(3), 0); // wraps to the return slot
/// assert!(catalog.covers(2, 2));
/// assert!(!catalog.covers(2, 1));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub(crate) fn from_products(products: Vec<Product>) -> Self {
        debug_assert!(products.len() >= 2);
        Self { products }
    }

    /// The catalog of the reference machine: the return slot plus three
    /// products priced 1, 2, and 3 credit units.
    pub fn standard() -> Self {
        CatalogBuilder::new()
            .product(1)
            .product(2)
            .product(3)
            .build()
            .expect("standard catalog is statically valid")
    }

    /// Number of entries, counting the index-0 return slot.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// A catalog always holds the return slot and at least one product.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All entries in index order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Price of the product at `index`, in credit units.
    ///
    /// The return slot reports a price of 0. Fails with
    /// [`CatalogError::OutOfRange`] for an index outside the catalog.
    pub fn price(&self, index: usize) -> Result<u32, CatalogError> {
        self.products
            .get(index)
            .map(|p| p.price)
            .ok_or(CatalogError::OutOfRange {
                index,
                len: self.products.len(),
            })
    }

    /// The index after `index`, wrapping past the last product back to
    /// the return slot. Total: never fails.
    pub fn next(&self, index: usize) -> usize {
        (index + 1) % self.products.len()
    }

    /// Whether `credit` covers the product at `index`.
    ///
    /// The return slot is always covered (confirming it returns credit,
    /// it costs nothing). An out-of-range index is never covered.
    pub fn covers(&self, index: usize, credit: u32) -> bool {
        if index == 0 {
            return true;
        }
        self.products
            .get(index)
            .is_some_and(|p| credit >= p.price)
    }
}
