pub mod compare;
pub mod config;
pub mod generator;
pub mod input;
pub mod report;
