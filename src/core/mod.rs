// src/core/mod.rs

pub mod mime;
pub mod net;
