use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse {table} table: {source}")]
    Parse {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    pub fn parse(table: &'static str, source: serde_json::Error) -> Self {
        Self::Parse { table, source }
    }
}
