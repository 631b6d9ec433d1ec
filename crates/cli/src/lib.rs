//! Interactive text-menu front end over the product inventory.

pub mod config;
pub mod menu;
pub mod session;

pub use config::Settings;
pub use menu::{MenuChoice, MenuError};
pub use session::{Session, load_or_empty};
