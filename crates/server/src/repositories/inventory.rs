//! Repository contracts for the inventory entities that have no behavior yet.
//! Future verticals (products, stock tracking, users) implement against these
//! the same way the category pipeline implements against `CategoryRepository`.

use async_trait::async_trait;

use crate::models::{StockLevel, StockMovement, StockReservation, User};
use crate::repositories::RepositoryError;

#[async_trait]
pub trait StockLevelRepository: Send + Sync {
    async fn create(&self, level: StockLevel) -> Result<StockLevel, RepositoryError>;
    async fn get_by_product_id(&self, product_id: i64) -> Result<StockLevel, RepositoryError>;
    async fn update_quantity(&self, level: StockLevel) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait StockMovementRepository: Send + Sync {
    async fn create(&self, movement: StockMovement) -> Result<StockMovement, RepositoryError>;
    async fn list_by_product_id(
        &self,
        product_id: i64,
    ) -> Result<Vec<StockMovement>, RepositoryError>;
}

#[async_trait]
pub trait StockReservationRepository: Send + Sync {
    async fn create(
        &self,
        reservation: StockReservation,
    ) -> Result<StockReservation, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<StockReservation, RepositoryError>;
    async fn list_active_by_product(
        &self,
        product_id: i64,
    ) -> Result<Vec<StockReservation>, RepositoryError>;
    async fn update_status(&self, id: i64, status: &str) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_by_id(&self, id: &str) -> Result<User, RepositoryError>;
}
