pub mod dispatcher;
pub mod range;
pub mod route;
pub mod store;

pub use crate::domain::model::{Employee, EmployeeId};
pub use crate::domain::ports::{ConfigProvider, EmployeeStore};
pub use crate::utils::error::Result;
