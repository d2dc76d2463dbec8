//! Core request pipeline module

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod normalize;
pub mod response;
pub mod signature;
