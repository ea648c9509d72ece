mod category;
mod inventory;
mod memory;

pub use category::{CategoryRepository, PostgresCategoryRepository, RepositoryError};
pub use inventory::{
    StockLevelRepository, StockMovementRepository, StockReservationRepository, UserRepository,
};
pub use memory::InMemoryCategoryRepository;
