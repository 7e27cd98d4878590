// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod specs;

pub mod account;
pub mod cli;
pub mod error;
pub mod game;
pub mod serve;
