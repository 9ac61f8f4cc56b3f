pub mod error;
pub mod memory;
pub mod store;
pub mod todo_dao;
pub mod todo_input;

pub use error::{DaoLayerError, DaoResult};
pub use memory::MemoryTodoDao;
pub use store::TodoStore;
pub use todo_dao::TodoDao;
pub use todo_input::{NewTodo, TodoPatch};
