pub mod auth;
pub mod inventory;
pub mod movement;
pub mod product;
pub mod profile;
pub mod warehouse;
