mod category;
mod inventory;
mod user;

pub use category::{Category, CreateCategory, UpdateCategory};
pub use inventory::{Product, StockLevel, StockMovement, StockReservation};
pub use user::User;
