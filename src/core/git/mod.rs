pub mod dispatch;
pub mod repo;

pub use dispatch::{commit_as, set_global_identity};
pub use repo::repo_root;
