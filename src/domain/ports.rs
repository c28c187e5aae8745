use crate::domain::model::Employee;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Backing collection for the dispatcher. Append-only; insertion order is
/// the listing order.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Employee>>;
    async fn find(&self, employee_id: i64) -> Result<Option<Employee>>;
    /// Append and return the whole collection after the insert.
    async fn append(&self, employee: Employee) -> Result<Vec<Employee>>;
}

/// Runtime settings shared by the CLI and Lambda entry points. `None` means
/// "not set here", letting the seed file or the built-in default apply.
pub trait ConfigProvider: Send + Sync {
    fn resource_path(&self) -> Option<&str>;
    fn seed_path(&self) -> Option<&str>;
}
