pub mod common;
pub mod scheduler;
pub mod seek;
