pub mod cli;
pub mod config;
pub mod errors;
pub mod gate;
pub mod generator;
pub mod storage;
pub mod vault;
