//! Domain types shared by the store adapter and the HTTP layer.
//!
//! Nothing in this crate touches the network or the database.

pub mod error;
pub mod movie;
pub mod pagination;
