use std::path::PathBuf;

pub const DEFAULT_DATA_PATH: &str = "data/world_bank_projects.json";

/// Field names and report sizes used by [`crate::analyze`] and the report writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub data_path: PathBuf,
    /// Column counted for the per-country ranking.
    pub country_field: String,
    /// Array-valued column holding `{code, name}` theme pairs.
    pub theme_field: String,
    /// Parent column copied onto every flattened theme row.
    pub id_field: String,
    /// Entries shown in each frequency table.
    pub top_k: usize,
    /// Records shown in the dataset head.
    pub head_rows: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            country_field: "countryname".to_string(),
            theme_field: "mjtheme_namecode".to_string(),
            id_field: "id".to_string(),
            top_k: 10,
            head_rows: 5,
        }
    }
}
