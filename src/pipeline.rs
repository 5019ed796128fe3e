use tracing::info;

use crate::config::PipelineConfig;
use crate::dataset::ProjectRecord;
use crate::error::Result;
use crate::stats::FrequencyTable;
use crate::themes::{flatten_themes, normalize_names, ThemeRow, MAJOR_THEMES};

/// Everything the report prints, computed from one set of records.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub records: Vec<ProjectRecord>,
    pub countries: FrequencyTable,
    pub themes: Vec<ThemeRow>,
    pub theme_codes: FrequencyTable,
    pub normalized: Vec<ThemeRow>,
    pub theme_names: FrequencyTable,
}

/// Count countries, flatten and count theme codes, then fill theme names
/// from [`MAJOR_THEMES`] and count those.
pub fn analyze(records: Vec<ProjectRecord>, cfg: &PipelineConfig) -> Result<Analysis> {
    let countries = FrequencyTable::count(&records, &cfg.country_field)?;
    info!(
        records = records.len(),
        countries = countries.len(),
        "counted projects per country"
    );

    let themes = flatten_themes(&records, &cfg.theme_field, &cfg.id_field)
        .collect::<Result<Vec<_>>>()?;
    let theme_codes = FrequencyTable::count(&themes, "code")?;
    info!(
        rows = themes.len(),
        codes = theme_codes.len(),
        "flattened theme list"
    );

    let normalized = normalize_names(themes.iter().cloned(), &MAJOR_THEMES);
    let theme_names = FrequencyTable::count(&normalized, "name")?;

    Ok(Analysis {
        records,
        countries,
        themes,
        theme_codes,
        normalized,
        theme_names,
    })
}
