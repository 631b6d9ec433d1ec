//! In-memory product inventory.
//!
//! Loaded once from a `;`-delimited file, then queried and edited in place.
//! All filters are linear scans over the underlying [`RecordStore`].

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use stockroom_core::{DomainResult, RecordStore};

use crate::product::{Product, ProductCode, ProductParseError, SearchField, StockSummary};

/// Failure to build an [`Inventory`] from a file. Loading is all-or-nothing.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("malformed product on line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: ProductParseError,
    },
}

/// Ordered product collection plus the operations over it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    products: RecordStore<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_products(products: Vec<Product>) -> Self {
        Self {
            products: RecordStore::from_records(products),
        }
    }

    /// Load a product file: one header line (skipped), then one product per line.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let inventory = Self::from_reader(BufReader::new(file))?;
        tracing::info!(
            path = %path.display(),
            products = inventory.len(),
            "inventory loaded"
        );
        Ok(inventory)
    }

    /// Parse products from any buffered source. Blank lines are skipped; the
    /// first malformed line aborts the whole load.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        let mut products = Vec::new();

        for (index, line) in reader.lines().enumerate().skip(1) {
            let line_no = index + 1;
            let line = line.map_err(|source| LoadError::Read {
                line: line_no,
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }

            let product = line.parse::<Product>().map_err(|source| LoadError::Malformed {
                line: line_no,
                source,
            })?;
            products.push(product);
        }

        Ok(Self::from_products(products))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Every product, in load/insertion order.
    pub fn list_all(&self) -> &[Product] {
        self.products.as_slice()
    }

    /// Products with `min <= sale_price <= max`.
    ///
    /// Bounds are not validated here; callers reject negative or inverted ranges.
    pub fn filter_by_price_range(&self, min: f64, max: f64) -> Vec<&Product> {
        self.products
            .filter(|p| p.sale_price >= min && p.sale_price <= max)
    }

    /// Case-insensitive equality on a named field. Unknown field names match nothing.
    pub fn filter_by_field(&self, field: &str, value: &str) -> Vec<&Product> {
        match field.parse::<SearchField>() {
            Ok(field) => self.filter_by(field, value),
            Err(_) => {
                tracing::debug!(field, "unknown search field");
                Vec::new()
            }
        }
    }

    pub fn filter_by(&self, field: SearchField, value: &str) -> Vec<&Product> {
        let wanted = value.to_lowercase();
        self.products
            .filter(|p| p.field(field).to_lowercase() == wanted)
    }

    pub fn stock_summary(&self) -> Vec<StockSummary<'_>> {
        self.products.iter().map(Product::stock_summary).collect()
    }

    /// First product whose code equals `code` exactly.
    pub fn find(&self, code: &str) -> Option<&Product> {
        self.products.find(&ProductCode::from(code))
    }

    /// Append a product. Codes are not checked for uniqueness.
    pub fn add(&mut self, product: Product) {
        tracing::info!(code = %product.code, "product added");
        self.products.push(product);
    }

    /// Replace the first product with `code` wholesale.
    pub fn update(&mut self, code: &str, product: Product) -> DomainResult<()> {
        self.products
            .replace_first(&ProductCode::from(code), product)?;
        tracing::info!(code, "product updated");
        Ok(())
    }

    /// Remove the first product with `code`, returning it.
    pub fn delete(&mut self, code: &str) -> DomainResult<Product> {
        let removed = self.products.remove_first(&ProductCode::from(code))?;
        tracing::info!(code, "product deleted");
        Ok(removed)
    }
}
