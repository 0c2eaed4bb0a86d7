//! Seller service trait definition.

use async_trait::async_trait;
use workforce_core::{Department, Interface, Seller, SellerId, WorkforceResult};

/// Seller service trait.
#[async_trait]
pub trait SellerService: Interface + Send + Sync {
    /// Lists every seller ordered by name.
    async fn find_all(&self) -> WorkforceResult<Vec<Seller>>;

    /// Gets a seller by ID.
    async fn find_by_id(&self, id: SellerId) -> WorkforceResult<Option<Seller>>;

    /// Inserts a transient seller or updates a persisted one.
    async fn save_or_update(&self, seller: &Seller) -> WorkforceResult<Seller>;

    /// Deletes a persisted seller.
    async fn remove(&self, seller: &Seller) -> WorkforceResult<()>;

    /// Lists the sellers of a persisted department ordered by name.
    async fn find_by_department(&self, department: &Department) -> WorkforceResult<Vec<Seller>>;
}
