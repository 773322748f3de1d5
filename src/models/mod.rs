//! Database models shared across the customer repository.

pub mod company;
#[cfg(feature = "server")]
pub mod config;
pub mod customer;
pub mod employee;
