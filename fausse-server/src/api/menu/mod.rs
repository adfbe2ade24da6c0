//! Menu API 模块

use axum::{Json, Router, routing::get};
use shared::models::{MenuItem, MenuSection};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/menu", get(menu))
}

fn section(name: &str, items: &[(&str, f64)]) -> MenuSection {
    MenuSection {
        name: name.to_string(),
        items: items
            .iter()
            .map(|(name, price)| MenuItem {
                name: name.to_string(),
                price: *price,
            })
            .collect(),
    }
}

/// 当前菜单 (按分区)
pub fn current_menu() -> Vec<MenuSection> {
    vec![
        section("Starters", &[("Bruschetta", 8.5), ("Caesar Salad", 9.0)]),
        section(
            "Mains",
            &[
                ("Grilled Salmon", 22.0),
                ("Ribeye Steak", 28.0),
                ("Vegetable Risotto", 18.0),
            ],
        ),
        section("Desserts", &[("Tiramisu", 7.5), ("Cheesecake", 7.0)]),
        section(
            "Beverages",
            &[
                ("Red Wine (Glass)", 10.0),
                ("White Wine (Glass)", 9.0),
                ("Craft Beer", 6.0),
                ("Espresso", 3.0),
            ],
        ),
    ]
}

/// GET /api/menu
async fn menu() -> Json<Vec<MenuSection>> {
    Json(current_menu())
}
