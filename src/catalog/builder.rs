//! Builder for constructing catalogs.

use crate::catalog::{Catalog, Product};
use thiserror::Error;

/// Errors that can occur when building a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("No products defined. Add at least one product besides the return slot")]
    NoProducts,

    #[error("Product at index {index} has a zero price; prices must be positive")]
    ZeroPrice { index: usize },
}

/// Builder for constructing catalogs with a fluent API.
///
/// Index 0 is always the reserved "Return Credit" slot and is added
/// implicitly; `product` calls fill indices 1, 2, 3, ... in order.
///
/// # Example
///
/// ```rust
/// use vendo::catalog::CatalogBuilder;
///
/// let catalog = CatalogBuilder::new()
///     .product(1)
///     .product(2)
///     .product(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(catalog.len(), 4); // return slot + three products
/// assert_eq!(catalog.price(2).unwrap(), 2);
/// ```
pub struct CatalogBuilder {
    prices: Vec<u32>,
}

impl CatalogBuilder {
    /// Create a new builder with only the implicit return slot.
    pub fn new() -> Self {
        Self { prices: Vec::new() }
    }

    /// Append a product with the given price, taking the next free index.
    pub fn product(mut self, price: u32) -> Self {
        self.prices.push(price);
        self
    }

    /// Build the catalog.
    /// Returns an error if no products were added or a price is zero.
    pub fn build(self) -> Result<Catalog, BuildError> {
        if self.prices.is_empty() {
            return Err(BuildError::NoProducts);
        }

        let mut products = vec![Product::return_slot()];
        for (offset, price) in self.prices.into_iter().enumerate() {
            let index = offset + 1;
            if price == 0 {
                return Err(BuildError::ZeroPrice { index });
            }
            products.push(Product { index, price });
        }

        Ok(Catalog::from_products(products))
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
