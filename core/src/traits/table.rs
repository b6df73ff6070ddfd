use std::any::Any;

use crate::SQLColumnInfo;

/// Runtime metadata for a mapped table.
pub trait SQLTableInfo: Any + Send + Sync {
    fn name(&self) -> &'static str;
    fn columns(&self) -> &'static [&'static dyn SQLColumnInfo];

    /// Tables this table references through foreign keys.
    fn dependencies(&self) -> Vec<&'static dyn SQLTableInfo> {
        let mut deps: Vec<&'static dyn SQLTableInfo> = Vec::new();
        for column in self.columns() {
            if let Some(target) = column.foreign_key() {
                let table = target.table();
                if table.name() != self.name() && !deps.iter().any(|t| t.name() == table.name()) {
                    deps.push(table);
                }
            }
        }
        deps
    }
}

impl std::fmt::Debug for dyn SQLTableInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SQLTableInfo")
            .field("name", &self.name())
            .field(
                "columns",
                &self.columns().iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
