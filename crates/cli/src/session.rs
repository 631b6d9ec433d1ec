//! Interactive menu session.
//!
//! A [`Session`] owns the inventory and the three console streams. It runs a
//! blocking read-eval-print loop until the user picks "Exit" or input ends.
//! Bad input is reported on the error stream and never ends the loop; only a
//! failure of the streams themselves is returned to the caller.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Context;

use stockroom_core::DomainError;
use stockroom_products::{Inventory, LINE_FORMAT, Product, SearchField};

use crate::menu::{MenuChoice, MenuError};

const NO_PRODUCTS: &str = "No products registered.";
const NOT_FOUND: &str = "Product not found.";

/// Load the product file, reporting the outcome on the console.
///
/// Any load failure is reported and yields an empty inventory.
pub fn load_or_empty<O, E>(path: &Path, out: &mut O, err: &mut E) -> anyhow::Result<Inventory>
where
    O: Write,
    E: Write,
{
    match Inventory::load(path) {
        Ok(inventory) => {
            writeln!(
                out,
                "Data loaded successfully from {} ({} products).",
                path.display(),
                inventory.len()
            )?;
            Ok(inventory)
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "could not load product file");
            writeln!(err, "Error reading the product file: {e}")?;
            Ok(Inventory::new())
        }
    }
}

/// Write one line per product, or `empty_message` when there are none.
fn print_products<'a, W: Write>(
    out: &mut W,
    products: impl IntoIterator<Item = &'a Product>,
    empty_message: &str,
) -> io::Result<()> {
    let mut any = false;
    for product in products {
        writeln!(out, "{product}")?;
        any = true;
    }
    if !any {
        writeln!(out, "{empty_message}")?;
    }
    Ok(())
}

pub struct Session<R, O, E> {
    inventory: Inventory,
    input: R,
    out: O,
    err: E,
}

impl<R, O, E> Session<R, O, E>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    pub fn new(inventory: Inventory, input: R, out: O, err: E) -> Self {
        Self {
            inventory,
            input,
            out,
            err,
        }
    }

    /// Tear the session down, handing back the (possibly edited) inventory.
    pub fn into_inventory(self) -> Inventory {
        self.inventory
    }

    /// Run the menu loop until "Exit" is chosen or input is exhausted.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.show_menu()?;
            let Some(line) = self.prompt("Enter an option: ")? else {
                tracing::debug!("input closed, leaving menu loop");
                writeln!(self.out)?;
                break;
            };

            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Exit) => {
                    writeln!(self.out, "Exiting the system. Goodbye!")?;
                    break;
                }
                Ok(choice) => {
                    tracing::debug!(option = choice.number(), "menu option selected");
                    self.dispatch(choice)?;
                }
                Err(MenuError::InvalidOption(n)) => {
                    tracing::debug!(option = n, "invalid menu option");
                    writeln!(self.err, "Invalid option. Try again.")?;
                }
                Err(e @ MenuError::NotANumber(_)) => {
                    writeln!(self.err, "Error: {e}.")?;
                }
            }
        }

        self.out.flush().context("failed to flush output")?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> anyhow::Result<()> {
        match choice {
            MenuChoice::ListAll => self.list_all(),
            MenuChoice::PriceRange => self.price_range(),
            MenuChoice::FieldQuery => self.field_query(),
            MenuChoice::StockSummary => self.stock_summary(),
            MenuChoice::Add => self.add(),
            MenuChoice::Update => self.update(),
            MenuChoice::Delete => self.delete(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn show_menu(&mut self) -> anyhow::Result<()> {
        writeln!(self.out, "\n=== Main Menu ===")?;
        for choice in MenuChoice::ALL {
            writeln!(self.out, "{}. {}", choice.number(), choice.label())?;
        }
        Ok(())
    }

    /// Print `text`, then read one line. `None` means input is exhausted.
    fn prompt(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush().context("failed to flush output")?;

        // Lossy decode: undecodable bytes become bad input, not a stream error.
        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn list_all(&mut self) -> anyhow::Result<()> {
        print_products(&mut self.out, self.inventory.list_all(), NO_PRODUCTS)?;
        Ok(())
    }

    fn read_price(&mut self, text: &str) -> anyhow::Result<Option<f64>> {
        let Some(raw) = self.prompt(text)? else {
            return Ok(None);
        };
        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Some(value)),
            _ => {
                writeln!(self.err, "Error: make sure you enter valid numeric values.")?;
                Ok(None)
            }
        }
    }

    fn price_range(&mut self) -> anyhow::Result<()> {
        writeln!(self.out, "Use (.) as the decimal separator")?;
        let Some(min) = self.read_price("Enter minimum price: ")? else {
            return Ok(());
        };
        let Some(max) = self.read_price("Enter maximum price: ")? else {
            return Ok(());
        };

        if min < 0.0 || max < 0.0 {
            writeln!(self.err, "Error: prices cannot be negative. Try again.")?;
            return Ok(());
        }
        if min > max {
            writeln!(
                self.err,
                "Error: the minimum price cannot be greater than the maximum price."
            )?;
            return Ok(());
        }

        print_products(
            &mut self.out,
            self.inventory.filter_by_price_range(min, max),
            "No products found in the given price range.",
        )?;
        Ok(())
    }

    fn field_query(&mut self) -> anyhow::Result<()> {
        let Some(raw_field) = self.prompt("Search by (group/category): ")? else {
            return Ok(());
        };
        let field = match raw_field.parse::<SearchField>() {
            Ok(field) => field,
            Err(_) => {
                writeln!(
                    self.err,
                    "Error: the search field is not valid. It must be 'group' or 'category'."
                )?;
                return Ok(());
            }
        };

        let Some(raw_value) = self.prompt("Enter the value to search for: ")? else {
            return Ok(());
        };
        let value = raw_value.trim();
        if value.is_empty() {
            writeln!(self.err, "Error: the value cannot be empty.")?;
            return Ok(());
        }

        print_products(
            &mut self.out,
            self.inventory.filter_by(field, value),
            "No products found for the given criteria.",
        )?;
        Ok(())
    }

    fn stock_summary(&mut self) -> anyhow::Result<()> {
        if self.inventory.is_empty() {
            writeln!(self.out, "{NO_PRODUCTS}")?;
            return Ok(());
        }
        for line in self.inventory.stock_summary() {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    /// Show the line-format hints and read one product line.
    ///
    /// `Ok(None)` covers both exhausted input and a line that failed to parse
    /// (already reported with `error_prefix`).
    fn read_product(&mut self, text: &str, error_prefix: &str) -> anyhow::Result<Option<Product>> {
        writeln!(self.out, "Use (;) to separate the fields")?;
        writeln!(self.out, "Use (.) as the decimal separator")?;
        let Some(line) = self.prompt(&format!("{text} ({LINE_FORMAT}): "))? else {
            return Ok(None);
        };

        match line.parse::<Product>() {
            Ok(product) => Ok(Some(product)),
            Err(e) => {
                tracing::debug!(error = %e, "rejected product line");
                writeln!(
                    self.err,
                    "{error_prefix}: make sure the data follows the expected format ({e})."
                )?;
                Ok(None)
            }
        }
    }

    fn add(&mut self) -> anyhow::Result<()> {
        if let Some(product) = self.read_product("Enter the new product data", "Error")? {
            self.inventory.add(product);
            writeln!(self.out, "Product added successfully.")?;
        }
        Ok(())
    }

    fn update(&mut self) -> anyhow::Result<()> {
        let Some(raw_code) = self.prompt("Enter the code of the product to update: ")? else {
            return Ok(());
        };
        let code = raw_code.trim();

        if self.inventory.find(code).is_none() {
            writeln!(self.out, "{NOT_FOUND}")?;
            return Ok(());
        }
        writeln!(self.out, "Product found. Enter the new data.")?;

        let Some(product) = self.read_product(
            "Enter the updated product data",
            "Error updating the product",
        )?
        else {
            return Ok(());
        };

        match self.inventory.update(code, product) {
            Ok(()) => writeln!(self.out, "Product updated successfully.")?,
            Err(DomainError::NotFound) => writeln!(self.out, "{NOT_FOUND}")?,
            Err(e) => writeln!(self.err, "Error updating the product: {e}")?,
        }
        Ok(())
    }

    fn delete(&mut self) -> anyhow::Result<()> {
        let Some(raw_code) = self.prompt("Enter the code of the product to delete: ")? else {
            return Ok(());
        };

        match self.inventory.delete(raw_code.trim()) {
            Ok(_) => writeln!(self.out, "Product deleted successfully.")?,
            Err(DomainError::NotFound) => writeln!(self.out, "{NOT_FOUND}")?,
            Err(e) => writeln!(self.err, "Error deleting the product: {e}")?,
        }
        Ok(())
    }
}
