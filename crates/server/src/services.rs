mod category;

pub use category::{CategoryError, CategoryService};
