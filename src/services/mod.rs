pub mod context;
pub mod error;
pub mod quote_service;
pub mod todo_service;
pub mod validation;

pub use context::ServiceContext;
pub use error::TodoError;
