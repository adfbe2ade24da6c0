//! Menu Model

use serde::{Deserialize, Serialize};

/// A single dish or drink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: f64,
}

/// A menu section (Starters, Mains, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSection {
    pub name: String,
    pub items: Vec<MenuItem>,
}
