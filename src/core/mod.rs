// src/core/mod.rs

pub mod columns;
pub mod csv;
pub mod natsort;
pub mod net;
pub mod num;
