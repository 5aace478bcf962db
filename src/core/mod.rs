pub mod git;
pub mod registry;
