use tracing::{debug, info};
use uuid::Uuid;

use rowpress_core::{
    DataMap, Entity, EntityRef, Error, FlattenConfig, JunctionTable, Related, Result, Row, Value,
};

use crate::dedup::deduplicate;
use crate::normalize::normalize;

/// Identifier column compared by the revisit guard.
const ID_COLUMN: &str = "id";

/// Recursive graph flattener.
///
/// Walks relationship edges depth-first from one or more root entities,
/// emitting one data row per distinct reachable entity and one association
/// row per distinct (owner, related) junction pair, then deduplicates the
/// result.
#[derive(Debug, Clone, Default)]
pub struct Flattener {
    config: FlattenConfig,
}

impl Flattener {
    pub fn new(config: FlattenConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FlattenConfig {
        &self.config
    }

    /// Flatten a single root entity.
    pub fn flatten(&self, root: &EntityRef) -> Result<DataMap> {
        self.flatten_all(std::slice::from_ref(root))
    }

    /// Flatten an ordered sequence of root entities into one deduplicated
    /// collection. An empty sequence yields an empty collection.
    pub fn flatten_all(&self, roots: &[EntityRef]) -> Result<DataMap> {
        let mut map = DataMap::new();
        for root in roots {
            self.visit(root.as_ref(), &mut map)?;
        }
        let map = deduplicate(map);
        info!(
            roots = roots.len(),
            tables = map.table_count(),
            rows = map.len(),
            "flatten completed"
        );
        Ok(map)
    }

    fn visit(&self, entity: &dyn Entity, map: &mut DataMap) -> Result<()> {
        debug!(table = entity.table(), "collecting row");
        map.push(entity.table(), self.data_row(entity));

        for relationship in entity.relationships() {
            match relationship.related {
                Related::One(None) => {}
                Related::One(Some(child)) => self.descend(child.as_ref(), map)?,
                Related::Many(children) => {
                    for child in children {
                        self.descend(child.as_ref(), map)?;
                    }
                }
                Related::ManyVia { junction, entities } => {
                    for child in entities {
                        let association = self.junction_row(&junction, entity, child.as_ref())?;
                        if !self.junction_present(map, &junction, &association) {
                            map.push(junction.table, association);
                        }
                        self.descend(child.as_ref(), map)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Recurse into a related instance unless it was already collected.
    fn descend(&self, child: &dyn Entity, map: &mut DataMap) -> Result<()> {
        if self.already_collected(child, map) {
            return Ok(());
        }
        self.visit(child, map)
    }

    /// The revisit guard: compares identifier fields through their stable
    /// key form, so a previously collected node is never re-entered.
    fn already_collected(&self, entity: &dyn Entity, map: &DataMap) -> bool {
        let Some(id) = entity.field(ID_COLUMN) else {
            return false;
        };
        map.contains_column_key(entity.table(), ID_COLUMN, &id.to_key())
    }

    fn data_row(&self, entity: &dyn Entity) -> Row {
        let mut row = Row::new();
        for (column, value) in entity.columns() {
            row.insert(column, normalize(value, &self.config));
        }
        row
    }

    /// Build one association row, resolving each junction column from
    /// whichever side its foreign key targets.
    fn junction_row(
        &self,
        junction: &JunctionTable,
        owner: &dyn Entity,
        related: &dyn Entity,
    ) -> Result<Row> {
        let mut row = Row::new();
        for column in junction.columns {
            let side = if column.references.table == owner.table() {
                owner
            } else if column.references.table == related.table() {
                related
            } else {
                return Err(Error::MalformedModel(format!(
                    "junction column '{}.{}' references table '{}', which is neither '{}' nor '{}'",
                    junction.table,
                    column.name,
                    column.references.table,
                    owner.table(),
                    related.table(),
                )));
            };
            let value = side.field(column.references.column).ok_or_else(|| {
                Error::MalformedModel(format!(
                    "junction column '{}.{}' references missing field '{}.{}'",
                    junction.table,
                    column.name,
                    side.table(),
                    column.references.column,
                ))
            })?;
            row.insert(column.name, normalize(value, &self.config));
        }
        if self.config.junction_surrogate_id {
            row.insert(self.config.junction_id_column.clone(), self.surrogate_id());
        }
        Ok(row)
    }

    fn surrogate_id(&self) -> Value {
        let id = Uuid::new_v4();
        if self.config.stringify_uuids {
            Value::Text(id.to_string())
        } else {
            Value::Uuid(id)
        }
    }

    /// Whether an equivalent association row was already emitted. Matching
    /// ignores the surrogate identifier column, which differs per row and
    /// would otherwise defeat plain equality.
    fn junction_present(&self, map: &DataMap, junction: &JunctionTable, candidate: &Row) -> bool {
        map.rows(junction.table).is_some_and(|rows| {
            rows.iter()
                .any(|row| row.matches_ignoring(candidate, &self.config.junction_id_column))
        })
    }
}
