use async_trait::async_trait;

use crate::errors::DbError;
use crate::models::{Department, Seller};

pub mod department;
pub mod memory;
pub mod seller;

pub use department::MySqlDepartmentDao;
pub use memory::{InMemoryDepartmentDao, InMemorySellerDao};
pub use seller::MySqlSellerDao;

/// Data access operations for departments.
///
/// Implementations target a single backing store; swap them freely, the
/// contract is the same everywhere.
#[async_trait]
pub trait DepartmentDao: Send + Sync {
    /// Persists a new department and writes the generated id back into it.
    ///
    /// The entity's id must be unset. Fails with
    /// [`DbError::UnexpectedData`] when the insert affects zero rows.
    async fn insert(&self, department: &mut Department) -> Result<(), DbError>;

    /// Overwrites all columns of the row matching the department's id.
    ///
    /// Matching no row is not an error; the call silently succeeds, as an
    /// UPDATE affecting zero rows does.
    async fn update(&self, department: &Department) -> Result<(), DbError>;

    /// Deletes the row with the given id. No-op when the id is absent.
    async fn delete_by_id(&self, id: i32) -> Result<(), DbError>;

    /// Finds a department by id.
    async fn find_by_id(&self, id: i32) -> Result<Option<Department>, DbError>;

    /// Lists every department, ordered by name.
    async fn find_all(&self) -> Result<Vec<Department>, DbError>;
}

/// Data access operations for sellers.
#[async_trait]
pub trait SellerDao: Send + Sync {
    async fn insert(&self, seller: &mut Seller) -> Result<(), DbError>;

    async fn update(&self, seller: &Seller) -> Result<(), DbError>;

    async fn delete_by_id(&self, id: i32) -> Result<(), DbError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Seller>, DbError>;

    /// Lists every seller, ordered by name.
    async fn find_all(&self) -> Result<Vec<Seller>, DbError>;

    /// Lists the sellers belonging to the given department, ordered by name.
    async fn find_by_department(&self, department: &Department)
        -> Result<Vec<Seller>, DbError>;
}
