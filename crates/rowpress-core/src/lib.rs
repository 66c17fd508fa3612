//! Core contracts and shared types for Rowpress.
//!
//! This crate defines the scalar value model, the row and table-keyed
//! collection types, the entity introspection contract, and the
//! configuration and error types shared by the flatten and render crates.

pub mod config;
pub mod data_map;
pub mod entity;
pub mod error;
pub mod relationship;
pub mod row;
pub mod value;

pub use config::FlattenConfig;
pub use data_map::DataMap;
pub use entity::{Entity, EntityRef};
pub use error::{Error, Result};
pub use relationship::{ColumnRef, JunctionColumn, JunctionTable, Related, Relationship};
pub use row::Row;
pub use value::{EnumValue, Value};
