pub mod policy;
pub mod visit;
