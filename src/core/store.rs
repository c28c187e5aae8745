use crate::core::{Employee, EmployeeStore};
use crate::domain::model::default_seed;
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Process-lifetime store. Every instance owns its own copy; nothing is shared
/// or persisted between instances.
#[derive(Debug)]
pub struct InMemoryStore {
    employees: RwLock<Vec<Employee>>,
}

impl InMemoryStore {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self {
            employees: RwLock::new(employees),
        }
    }

    pub fn seeded() -> Self {
        Self::new(default_seed())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Employee>>> {
        self.employees.read().map_err(|e| GatewayError::StoreError {
            message: format!("employee store lock poisoned: {}", e),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Employee>>> {
        self.employees.write().map_err(|e| GatewayError::StoreError {
            message: format!("employee store lock poisoned: {}", e),
        })
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl EmployeeStore for InMemoryStore {
    async fn list(&self) -> Result<Vec<Employee>> {
        Ok(self.read()?.clone())
    }

    async fn find(&self, employee_id: i64) -> Result<Option<Employee>> {
        Ok(self.read()?.iter().find(|e| e.has_id(employee_id)).cloned())
    }

    async fn append(&self, employee: Employee) -> Result<Vec<Employee>> {
        let mut employees = self.write()?;
        tracing::debug!("Appending employee {} ({})", employee.name, employee.employee_id);
        employees.push(employee);
        Ok(employees.clone())
    }
}
