pub mod auth;
pub mod inventory;
pub mod products;
pub mod sales;
pub mod users;
pub mod warehouses;
