use crate::error::ConfigError;
use model::{core::data_type::DataType, schema::column::ColumnSpec};
use serde::Deserialize;

/// Sync-session settings as the host's config layer hands them over.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncConfig {
    pub endpoint: String,
    /// Service description location; derived from the endpoint when unset.
    #[serde(default)]
    pub wsdl: Option<String>,
    pub user_id: String,
    pub encryption_key: String,
    /// Incremental boundary: records updated before this are assumed synced.
    pub last_updated_at: String,
    #[serde(default)]
    pub columns: Vec<ColumnConfig>,
}

/// One output column as written in the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
    #[serde(default)]
    pub format: Option<String>,
}

impl SyncConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))
    }

    pub fn wsdl_url(&self) -> String {
        self.wsdl
            .clone()
            .unwrap_or_else(|| format!("{}?WSDL", self.endpoint))
    }

    /// Builds the session's fixed column list from configuration.
    ///
    /// Config types are already in the target vocabulary; the remote mapping
    /// table is not consulted here.
    pub fn build_columns(&self) -> Result<Vec<ColumnSpec>, ConfigError> {
        if self.columns.is_empty() {
            return Err(ConfigError::NoColumns);
        }

        self.columns
            .iter()
            .map(|column| {
                let data_type = DataType::try_from(column.column_type.as_str()).map_err(|_| {
                    ConfigError::UnsupportedType {
                        column: column.name.clone(),
                        column_type: column.column_type.clone(),
                    }
                })?;
                Ok(ColumnSpec {
                    name: column.name.clone(),
                    data_type,
                    format: column.format.clone(),
                })
            })
            .collect()
    }
}
