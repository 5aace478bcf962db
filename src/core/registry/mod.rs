pub mod model;
pub mod resolve;
pub mod store;

pub use model::{Identity, Registry};
pub use resolve::resolve;
pub use store::{default_store_path, load, save};
