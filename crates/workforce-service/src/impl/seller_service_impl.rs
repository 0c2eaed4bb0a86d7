//! Seller service implementation.

use crate::seller_service::SellerService;
use async_trait::async_trait;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};
use workforce_core::{Department, Entity, Seller, SellerId, WorkforceError, WorkforceResult};
use workforce_repository::SellerDao;

/// Seller service backed by a [`SellerDao`].
#[derive(Component)]
#[shaku(interface = SellerService)]
pub struct SellerServiceImpl {
    #[shaku(inject)]
    seller_dao: Arc<dyn SellerDao>,
}

impl SellerServiceImpl {
    /// Creates a new seller service.
    #[must_use]
    pub fn new(seller_dao: Arc<dyn SellerDao>) -> Self {
        Self { seller_dao }
    }
}

#[async_trait]
impl SellerService for SellerServiceImpl {
    async fn find_all(&self) -> WorkforceResult<Vec<Seller>> {
        self.seller_dao.find_all().await
    }

    async fn find_by_id(&self, id: SellerId) -> WorkforceResult<Option<Seller>> {
        self.seller_dao.find_by_id(id).await
    }

    async fn save_or_update(&self, seller: &Seller) -> WorkforceResult<Seller> {
        if seller.is_transient() {
            debug!("Saving new seller: {}", seller.name);
            self.seller_dao.insert(seller).await
        } else {
            debug!("Updating seller: {}", seller.name);
            self.seller_dao.update(seller).await
        }
    }

    async fn remove(&self, seller: &Seller) -> WorkforceResult<()> {
        let id = seller
            .id
            .ok_or_else(|| WorkforceError::validation("id", "Seller has not been saved"))?;

        self.seller_dao.delete_by_id(id).await?;
        info!("Seller removed: {}", id);
        Ok(())
    }

    async fn find_by_department(&self, department: &Department) -> WorkforceResult<Vec<Seller>> {
        let id = department.id.ok_or_else(|| {
            WorkforceError::validation("department", "Department has not been saved")
        })?;

        self.seller_dao.find_by_department(id).await
    }
}

impl std::fmt::Debug for SellerServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SellerServiceImpl").finish_non_exhaustive()
    }
}
