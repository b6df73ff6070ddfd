use std::any::Any;

use crate::SQLTableInfo;

/// Runtime metadata for a mapped column.
pub trait SQLColumnInfo: Any + Send + Sync {
    fn name(&self) -> &'static str;
    fn r#type(&self) -> &'static str;
    fn is_primary_key(&self) -> bool;
    fn is_not_null(&self) -> bool;

    fn table(&self) -> &'static dyn SQLTableInfo;
    /// Returns the foreign key reference if this column has one
    fn foreign_key(&self) -> Option<&'static dyn SQLColumnInfo> {
        None
    }
    /// SQL literal used as the column default in DDL.
    fn default_sql(&self) -> Option<&'static str> {
        None
    }
}

impl std::fmt::Debug for dyn SQLColumnInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SQLColumnInfo")
            .field("name", &self.name())
            .field("type", &self.r#type())
            .field("not_null", &self.is_not_null())
            .field("primary_key", &self.is_primary_key())
            .field("table", &self.table().name())
            .finish()
    }
}
