use rowpress_core::{FlattenConfig, Value};

/// Convert one raw scalar value into its canonical output representation.
///
/// Pure function of the value and the configuration; each conversion is
/// independently toggleable.
pub fn normalize(value: Value, config: &FlattenConfig) -> Value {
    match value {
        Value::Enum(value) if config.use_enum_values => normalize(*value.stored, config),
        Value::Date(value) if config.stringify_dates => {
            Value::Text(value.format("%Y-%m-%d").to_string())
        }
        Value::DateTime(value) if config.stringify_dates => {
            Value::Text(value.format("%Y-%m-%d %H:%M:%S").to_string())
        }
        Value::Uuid(value) if config.stringify_uuids => Value::Text(value.to_string()),
        other => other,
    }
}
