// src/gui/components/mod.rs
pub mod controls;
pub mod leaderboard;
pub mod rounds;
