//! SellerDao trait: persistence contract for sellers.

use async_trait::async_trait;
use workforce_core::{DepartmentId, Interface, Seller, SellerId, WorkforceResult};

/// Seller data access object.
///
/// Every seller returned by one call shares a single `Department`
/// allocation per distinct department id.
#[async_trait]
pub trait SellerDao: Interface + Send + Sync {
    /// Inserts a transient seller and returns it with its generated id.
    ///
    /// The seller's department must already be persisted.
    async fn insert(&self, seller: &Seller) -> WorkforceResult<Seller>;

    /// Overwrites every column of a persisted seller.
    async fn update(&self, seller: &Seller) -> WorkforceResult<Seller>;

    /// Deletes a seller by id.
    async fn delete_by_id(&self, id: SellerId) -> WorkforceResult<()>;

    /// Finds a seller by id, with its department populated.
    async fn find_by_id(&self, id: SellerId) -> WorkforceResult<Option<Seller>>;

    /// Lists every seller ordered by name.
    async fn find_all(&self) -> WorkforceResult<Vec<Seller>>;

    /// Lists the sellers of one department ordered by name.
    async fn find_by_department(&self, department_id: DepartmentId) -> WorkforceResult<Vec<Seller>>;
}
