//! Main menu: the numbered options and how a typed choice is parsed.

use core::str::FromStr;

use thiserror::Error;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListAll,
    PriceRange,
    FieldQuery,
    StockSummary,
    Add,
    Update,
    Delete,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::ListAll,
        MenuChoice::PriceRange,
        MenuChoice::FieldQuery,
        MenuChoice::StockSummary,
        MenuChoice::Add,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> u8 {
        match self {
            MenuChoice::ListAll => 1,
            MenuChoice::PriceRange => 2,
            MenuChoice::FieldQuery => 3,
            MenuChoice::StockSummary => 4,
            MenuChoice::Add => 5,
            MenuChoice::Update => 6,
            MenuChoice::Delete => 7,
            MenuChoice::Exit => 8,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::ListAll => "Show all products",
            MenuChoice::PriceRange => "Search products by price range",
            MenuChoice::FieldQuery => "Search products by group or category",
            MenuChoice::StockSummary => "Show product stock",
            MenuChoice::Add => "Add a new product",
            MenuChoice::Update => "Update an existing product",
            MenuChoice::Delete => "Delete a product",
            MenuChoice::Exit => "Exit",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MenuError {
    #[error("you must enter a number for the option")]
    NotANumber(String),

    #[error("invalid option {0}, try again")]
    InvalidOption(i64),
}

impl FromStr for MenuChoice {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed
            .parse::<i64>()
            .map_err(|_| MenuError::NotANumber(trimmed.to_string()))?;

        MenuChoice::ALL
            .into_iter()
            .find(|choice| i64::from(choice.number()) == number)
            .ok_or(MenuError::InvalidOption(number))
    }
}
