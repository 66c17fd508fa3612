//! Relationship and junction descriptors.
//!
//! Relationships are declared statically by each entity type and surfaced
//! through [`crate::Entity::relationships`], so the flattener can walk the
//! graph without runtime reflection.

use crate::entity::EntityRef;

/// A reference to a column on one side of a junction foreign key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRef {
    /// Table the foreign key targets (e.g. `"supplier"`).
    pub table: &'static str,
    /// Referenced column on that table (e.g. `"id"`).
    pub column: &'static str,
}

impl ColumnRef {
    #[must_use]
    pub const fn new(table: &'static str, column: &'static str) -> Self {
        Self { table, column }
    }
}

/// One column of an association table and the side its foreign key targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JunctionColumn {
    /// Column name in the association table (e.g. `"supplier_id"`).
    pub name: &'static str,
    /// Which table and column supply this column's value.
    pub references: ColumnRef,
}

impl JunctionColumn {
    #[must_use]
    pub const fn new(name: &'static str, references: ColumnRef) -> Self {
        Self { name, references }
    }
}

/// Descriptor of an association table implementing a many-to-many
/// relationship via foreign keys to both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JunctionTable {
    /// The association table name (e.g. `"supplier_category"`).
    pub table: &'static str,
    /// Its foreign-key columns.
    pub columns: &'static [JunctionColumn],
}

impl JunctionTable {
    #[must_use]
    pub const fn new(table: &'static str, columns: &'static [JunctionColumn]) -> Self {
        Self { table, columns }
    }
}

/// Related instances reachable through one relationship edge.
///
/// Keyed (map-style) to-many collections surface their values here; keys
/// are not part of the contract.
#[derive(Clone)]
pub enum Related {
    /// Single related instance, possibly absent.
    One(Option<EntityRef>),
    /// Direct collection of related instances.
    Many(Vec<EntityRef>),
    /// Collection associated through a junction table.
    ManyVia {
        junction: JunctionTable,
        entities: Vec<EntityRef>,
    },
}

/// A declared relationship edge of an entity type.
#[derive(Clone)]
pub struct Relationship {
    /// Name of the relationship field.
    pub name: &'static str,
    /// The instances on the other end.
    pub related: Related,
}

impl Relationship {
    pub fn new(name: &'static str, related: Related) -> Self {
        Self { name, related }
    }
}
