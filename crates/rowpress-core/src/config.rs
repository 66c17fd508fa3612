/// Options applied to one flatten + render pipeline.
///
/// The configuration is an immutable value threaded through calls, so
/// independent pipelines with different settings never interfere.
#[derive(Debug, Clone)]
pub struct FlattenConfig {
    /// Whether junction rows get a synthetic identifier column.
    pub junction_surrogate_id: bool,
    /// Column name for the synthetic junction identifier.
    pub junction_id_column: String,
    /// Convert unique-identifier values to their hyphenated text form.
    pub stringify_uuids: bool,
    /// Convert date and date-time values to fixed text forms.
    pub stringify_dates: bool,
    /// Emit enumeration values as their underlying stored value rather
    /// than the symbolic name.
    pub use_enum_values: bool,
}

impl Default for FlattenConfig {
    fn default() -> Self {
        Self {
            junction_surrogate_id: true,
            junction_id_column: "id".to_string(),
            stringify_uuids: true,
            stringify_dates: true,
            use_enum_values: true,
        }
    }
}

impl FlattenConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn junction_surrogate_id(mut self, value: bool) -> Self {
        self.junction_surrogate_id = value;
        self
    }

    #[must_use]
    pub fn junction_id_column(mut self, column: impl Into<String>) -> Self {
        self.junction_id_column = column.into();
        self
    }

    #[must_use]
    pub fn stringify_uuids(mut self, value: bool) -> Self {
        self.stringify_uuids = value;
        self
    }

    #[must_use]
    pub fn stringify_dates(mut self, value: bool) -> Self {
        self.stringify_dates = value;
        self
    }

    #[must_use]
    pub fn use_enum_values(mut self, value: bool) -> Self {
        self.use_enum_values = value;
        self
    }
}
