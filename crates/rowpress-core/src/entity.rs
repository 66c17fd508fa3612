use std::rc::Rc;

use crate::relationship::Relationship;
use crate::value::Value;

/// Shared handle to a graph entity.
///
/// Entities are reference counted so callers can express graphs where one
/// instance is reachable through multiple paths, including cycles.
pub type EntityRef = Rc<dyn Entity>;

/// Self-description of one mapped record type.
///
/// This is the static replacement for the runtime reflection the flattener
/// would otherwise need: each entity type reports its table identity, its
/// scalar fields in declared order, and its relationship edges.
pub trait Entity {
    /// Table this entity's data row belongs to.
    fn table(&self) -> &'static str;

    /// Scalar fields in declared order, with raw (pre-normalization)
    /// values.
    fn columns(&self) -> Vec<(&'static str, Value)>;

    /// Relationship edges in declared order. Defaults to none for leaf
    /// entity types.
    fn relationships(&self) -> Vec<Relationship> {
        Vec::new()
    }

    /// Look up a single scalar field by column name. Junction columns
    /// resolve their foreign-key values through this.
    fn field(&self, column: &str) -> Option<Value> {
        self.columns()
            .into_iter()
            .find(|(name, _)| *name == column)
            .map(|(_, value)| value)
    }
}
