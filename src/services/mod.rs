pub mod context;
pub mod store;

pub use context::ServiceContext;
pub use store::{ActionInput, ActionStore, ProjectInput, ProjectStore};
