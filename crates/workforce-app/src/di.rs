//! Dependency injection module using Shaku.
//!
//! One module wires the whole stack in a single process:
//! database pool → DAOs → services.

use shaku::{module, HasComponent};
use std::sync::Arc;
use tracing::info;
use workforce_config::DatabaseConfig;
use workforce_core::WorkforceResult;
use workforce_repository::{
    DatabasePool, DatabasePoolInterface, DatabasePoolParameters, DepartmentDao, SellerDao,
    SqliteDepartmentDao, SqliteSellerDao,
};
use workforce_service::{DepartmentService, DepartmentServiceImpl, SellerService, SellerServiceImpl};

// ============================================================================
// Shaku Module Definitions
// ============================================================================

// Application module backed by a local SQLite database.
// Every DAO shares the one pool component.
module! {
    pub AppModule {
        components = [
            DatabasePool,
            SqliteDepartmentDao,
            SqliteSellerDao,
            DepartmentServiceImpl,
            SellerServiceImpl,
        ],
        providers = [],
    }
}

// ============================================================================
// Module Builders
// ============================================================================

/// Connects to the database and builds the application module.
///
/// Migrations run first when `run_migrations` is enabled.
pub async fn build_app_module(db_config: &DatabaseConfig) -> WorkforceResult<Arc<AppModule>> {
    let db_pool = DatabasePool::new(db_config).await?;

    if db_config.run_migrations {
        db_pool.run_migrations().await?;
    }

    let module = module_from_pool(&db_pool);
    info!("Application module ready");
    Ok(Arc::new(module))
}

/// Builds the application module around an existing pool.
///
/// The module gets a handle to the same underlying connections.
#[must_use]
pub fn module_from_pool(db_pool: &DatabasePool) -> AppModule {
    AppModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: db_pool.inner().clone(),
        })
        .build()
}

// ============================================================================
// Module Resolution Helpers
// ============================================================================

/// Trait for resolving services from a module.
pub trait ServiceResolver {
    /// Resolves the department service from the module.
    fn department_service(&self) -> Arc<dyn DepartmentService>;

    /// Resolves the seller service from the module.
    fn seller_service(&self) -> Arc<dyn SellerService>;
}

impl ServiceResolver for AppModule {
    fn department_service(&self) -> Arc<dyn DepartmentService> {
        self.resolve()
    }

    fn seller_service(&self) -> Arc<dyn SellerService> {
        self.resolve()
    }
}

/// Trait for resolving DAOs and the pool from a module.
pub trait DatabaseResolver {
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface>;

    fn department_dao(&self) -> Arc<dyn DepartmentDao>;

    fn seller_dao(&self) -> Arc<dyn SellerDao>;
}

impl DatabaseResolver for AppModule {
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }

    fn department_dao(&self) -> Arc<dyn DepartmentDao> {
        self.resolve()
    }

    fn seller_dao(&self) -> Arc<dyn SellerDao> {
        self.resolve()
    }
}
