use core::str::FromStr;

use thiserror::Error;

use stockroom_core::{DomainError, Entity};

/// Separator between the fields of a product line.
pub const FIELD_DELIMITER: char = ';';

/// Number of positional fields in a product line.
pub const FIELD_COUNT: usize = 10;

/// Field order of a product line, as shown to users entering one by hand.
pub const LINE_FORMAT: &str =
    "Code;Name;Packaging;Group;Category;Brand;Cost;SalePrice;Discount;Stock";

/// Product code (the lookup key for update/delete).
///
/// Codes compare exactly and case-sensitively. Uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductCode(String);

impl ProductCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A product record.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub code: ProductCode,
    pub name: String,
    pub packaging: String,
    pub group: String,
    pub category: String,
    pub brand: String,
    pub cost: f64,
    pub sale_price: f64,
    pub discount: f64,
    pub stock: i64,
}

impl Entity for Product {
    type Id = ProductCode;

    fn id(&self) -> &Self::Id {
        &self.code
    }
}

impl Product {
    /// Compact stock view of this product.
    pub fn stock_summary(&self) -> StockSummary<'_> {
        StockSummary {
            code: &self.code,
            name: &self.name,
            packaging: &self.packaging,
            stock: self.stock,
        }
    }

    pub fn field(&self, field: SearchField) -> &str {
        match field {
            SearchField::Group => &self.group,
            SearchField::Category => &self.category,
        }
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Product [Code={}, Name={}, Packaging={}, Group={}, Category={}, Brand={}, \
             Cost={}, Sale price={}, Discount={}, Stock={}]",
            self.code,
            self.name,
            self.packaging,
            self.group,
            self.category,
            self.brand,
            self.cost,
            self.sale_price,
            self.discount,
            self.stock,
        )
    }
}

/// Why a product line could not be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductParseError {
    #[error("expected {expected} fields separated by ';', found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("{field} must be a decimal number (got {value:?})")]
    InvalidDecimal { field: &'static str, value: String },

    #[error("{field} must be an integer (got {value:?})")]
    InvalidInteger { field: &'static str, value: String },
}

fn parse_decimal(field: &'static str, raw: &str) -> Result<f64, ProductParseError> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ProductParseError::InvalidDecimal {
            field,
            value: raw.to_string(),
        })
}

fn parse_integer(field: &'static str, raw: &str) -> Result<i64, ProductParseError> {
    raw.parse::<i64>()
        .map_err(|_| ProductParseError::InvalidInteger {
            field,
            value: raw.to_string(),
        })
}

impl FromStr for Product {
    type Err = ProductParseError;

    /// Parse one `;`-delimited line of exactly [`FIELD_COUNT`] fields.
    ///
    /// Fields are trimmed and trailing delimiters are ignored.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim().trim_end_matches(FIELD_DELIMITER);
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();

        let [code, name, packaging, group, category, brand, cost, sale_price, discount, stock] =
            fields.as_slice()
        else {
            return Err(ProductParseError::FieldCount {
                expected: FIELD_COUNT,
                found: fields.len(),
            });
        };

        Ok(Self {
            code: ProductCode::new(*code),
            name: name.to_string(),
            packaging: packaging.to_string(),
            group: group.to_string(),
            category: category.to_string(),
            brand: brand.to_string(),
            cost: parse_decimal("cost", cost)?,
            sale_price: parse_decimal("sale_price", sale_price)?,
            discount: parse_decimal("discount", discount)?,
            stock: parse_integer("stock", stock)?,
        })
    }
}

/// Per-product stock view: code, name, packaging and units on hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockSummary<'a> {
    pub code: &'a ProductCode,
    pub name: &'a str,
    pub packaging: &'a str,
    pub stock: i64,
}

impl core::fmt::Display for StockSummary<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Code: {}, Name: {}, Packaging: {}, Stock: {}",
            self.code, self.name, self.packaging, self.stock
        )
    }
}

/// Text field a product can be searched by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Group,
    Category,
}

impl FromStr for SearchField {
    type Err = DomainError;

    /// Case-insensitive; the Spanish names used by older data files are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "group" | "grupo" => Ok(SearchField::Group),
            "category" | "categoria" | "categoría" => Ok(SearchField::Category),
            _ => Err(DomainError::validation(
                "field must be one of: group, category",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MILK: &str = "P001;Whole milk;1L carton;Dairy;Milk;Lala;12.5;18.90;0;40";

    #[test]
    fn parses_all_ten_fields_positionally() {
        let product: Product = MILK.parse().unwrap();

        assert_eq!(product.code.as_str(), "P001");
        assert_eq!(product.name, "Whole milk");
        assert_eq!(product.packaging, "1L carton");
        assert_eq!(product.group, "Dairy");
        assert_eq!(product.category, "Milk");
        assert_eq!(product.brand, "Lala");
        assert_eq!(product.cost, 12.5);
        assert_eq!(product.sale_price, 18.90);
        assert_eq!(product.discount, 0.0);
        assert_eq!(product.stock, 40);
    }

    #[test]
    fn trims_fields_and_tolerates_trailing_delimiter() {
        let product: Product = " P9 ; Soap ;bar; Home;Cleaning;Zote; 1 ; 2.5 ;0.1; 7 ;"
            .parse()
            .unwrap();

        assert_eq!(product.code.as_str(), "P9");
        assert_eq!(product.name, "Soap");
        assert_eq!(product.sale_price, 2.5);
        assert_eq!(product.stock, 7);
    }

    #[test]
    fn ignores_every_trailing_empty_field() {
        let product: Product = "A;B;C;D;E;F;1;2;3;4;;".parse().unwrap();
        assert_eq!(product.code.as_str(), "A");
        assert_eq!(product.stock, 4);

        // Padding does not make up for a missing field.
        let err = "A;B;C;D;E;F;1;2;3;;;".parse::<Product>().unwrap_err();
        assert!(matches!(err, ProductParseError::FieldCount { found: 9, .. }));
    }

    #[test]
    fn rejects_wrong_field_count() {
        let err = "P1;Soap;bar;Home;Cleaning;Zote;1;2.5;0"
            .parse::<Product>()
            .unwrap_err();
        assert_eq!(
            err,
            ProductParseError::FieldCount {
                expected: 10,
                found: 9
            }
        );

        let err = format!("{MILK};extra").parse::<Product>().unwrap_err();
        assert!(matches!(err, ProductParseError::FieldCount { found: 11, .. }));
    }

    #[test]
    fn rejects_decimal_comma_and_non_finite_prices() {
        let err = "P1;Soap;bar;Home;Cleaning;Zote;1;2,5;0;3"
            .parse::<Product>()
            .unwrap_err();
        match err {
            ProductParseError::InvalidDecimal { field, value } => {
                assert_eq!(field, "sale_price");
                assert_eq!(value, "2,5");
            }
            _ => panic!("Expected InvalidDecimal for sale_price"),
        }

        let err = "P1;Soap;bar;Home;Cleaning;Zote;NaN;2;0;3"
            .parse::<Product>()
            .unwrap_err();
        assert!(matches!(err, ProductParseError::InvalidDecimal { field: "cost", .. }));
    }

    #[test]
    fn rejects_fractional_stock() {
        let err = "P1;Soap;bar;Home;Cleaning;Zote;1;2;0;3.5"
            .parse::<Product>()
            .unwrap_err();
        assert!(matches!(err, ProductParseError::InvalidInteger { field: "stock", .. }));
    }

    #[test]
    fn display_lists_every_field() {
        let product: Product = MILK.parse().unwrap();
        let rendered = product.to_string();

        assert!(rendered.starts_with("Product [Code=P001, Name=Whole milk"));
        assert!(rendered.contains("Brand=Lala"));
        assert!(rendered.contains("Sale price=18.9"));
        assert!(rendered.ends_with("Stock=40]"));
    }

    #[test]
    fn stock_summary_renders_compactly() {
        let product: Product = MILK.parse().unwrap();

        assert_eq!(
            product.stock_summary().to_string(),
            "Code: P001, Name: Whole milk, Packaging: 1L carton, Stock: 40"
        );
    }

    #[test]
    fn search_field_parses_case_insensitively() {
        assert_eq!("GROUP".parse::<SearchField>(), Ok(SearchField::Group));
        assert_eq!(" Grupo ".parse::<SearchField>(), Ok(SearchField::Group));
        assert_eq!("Category".parse::<SearchField>(), Ok(SearchField::Category));
        assert_eq!("CATEGORIA".parse::<SearchField>(), Ok(SearchField::Category));

        let err = "brand".parse::<SearchField>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
