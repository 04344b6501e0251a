//! Grid Skirmish - turn-based tactics on an 8x8 board

pub mod battle;
pub mod board;
pub mod character;
pub mod core;
pub mod persistence;
pub mod presentation;
