//! Domain entities exposed by the customer service layer.

pub mod company;
pub mod customer;
pub mod employee;
pub mod types;
