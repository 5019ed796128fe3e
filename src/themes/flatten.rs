//! Expand each record's nested theme list into one row per `{code, name}` pair.

use serde::Serialize;
use serde_json::Value;

use crate::dataset::{render_value, ProjectRecord};
use crate::error::{DatasetError, Result};
use crate::stats::Fields;

/// One theme pair tagged with its parent record's identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeRow {
    /// Theme code as found in the source; only string codes match the lookup table.
    pub code: Value,
    pub name: String,
    /// Parent identifier, string or number as found in the source.
    pub id: Value,
    #[serde(skip)]
    pub record: usize,
}

impl ThemeRow {
    pub const COLUMNS: [&'static str; 3] = ["code", "name", "id"];
}

impl Fields for ThemeRow {
    fn field(&self, field: &str) -> Result<Value> {
        match field {
            "code" => Ok(self.code.clone()),
            "name" => Ok(Value::String(self.name.clone())),
            "id" => Ok(self.id.clone()),
            other => Err(DatasetError::UnknownColumn(other.to_string())),
        }
    }
}

/// Lazily walk `records` in order, emitting one [`ThemeRow`] per element of
/// `array_field`, each carrying the record's `id_field` value.
///
/// No filtering or deduplication: an empty array yields nothing, repeated
/// elements yield repeated rows.
pub fn flatten_themes<'a>(
    records: &'a [ProjectRecord],
    array_field: &'a str,
    id_field: &'a str,
) -> impl Iterator<Item = Result<ThemeRow>> + 'a {
    records.iter().flat_map(move |rec| -> RowIter<'a> {
        match record_themes(rec, array_field, id_field) {
            Ok((id, items)) => Box::new(
                items
                    .iter()
                    .map(move |item| theme_row(rec.index(), array_field, id, item)),
            ),
            Err(e) => Box::new(std::iter::once(Err(e))),
        }
    })
}

type RowIter<'a> = Box<dyn Iterator<Item = Result<ThemeRow>> + 'a>;

fn record_themes<'a>(
    rec: &'a ProjectRecord,
    array_field: &str,
    id_field: &str,
) -> Result<(&'a Value, &'a Vec<Value>)> {
    let items = rec.get_array(array_field)?;
    let id = rec.get(id_field)?;
    Ok((id, items))
}

fn theme_row(record: usize, array_field: &str, id: &Value, item: &Value) -> Result<ThemeRow> {
    let obj = item.as_object().ok_or_else(|| DatasetError::FieldType {
        record,
        field: array_field.to_string(),
        expected: "an array of objects",
    })?;
    let code = match obj.get("code") {
        None | Some(Value::Null) => Value::String(String::new()),
        Some(v) => v.clone(),
    };
    Ok(ThemeRow {
        code,
        name: obj.get("name").map(render_value).unwrap_or_default(),
        id: id.clone(),
        record,
    })
}
