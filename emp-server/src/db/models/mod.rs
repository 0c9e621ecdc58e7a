//! Database models and request payloads

pub mod employee;
pub mod serde_helpers;
pub mod user;

pub use employee::{
    Employee, EmployeeCreate, EmployeeFilter, EmployeeId, EmployeeMerge, EmployeeUpdate,
    NewEmployee,
};
pub use user::{LoginRequest, NewUser, User, UserCreate, UserId};
