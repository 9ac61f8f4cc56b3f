pub mod health;
pub mod quote;
mod router;
pub mod todo;

pub use router::router;
