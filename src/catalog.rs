pub mod command;
pub mod domain;
pub mod factory;
pub mod sample;
