use tracing::{debug, warn};

use super::{CodeNameTable, ThemeRow};

/// Set every row's name to the table's canonical name for its code.
///
/// The table wins over the data: a known code is rewritten even when the row
/// already carries a different name. Rows with unknown codes pass through,
/// and so do non-string codes: `1` is not the code `"1"`.
pub fn normalize_names<I>(rows: I, table: &CodeNameTable) -> Vec<ThemeRow>
where
    I: IntoIterator<Item = ThemeRow>,
{
    let mut changed = 0usize;
    let mut untyped = 0usize;
    let out: Vec<ThemeRow> = rows
        .into_iter()
        .map(|mut row| {
            match row.code.as_str() {
                Some(code) => {
                    if let Some(name) = table.name_for(code) {
                        if row.name != name {
                            row.name = name.to_string();
                            changed += 1;
                        }
                    }
                }
                None => untyped += 1,
            }
            row
        })
        .collect();
    if untyped > 0 {
        warn!(rows = untyped, "theme codes that are not strings were left as-is");
    }
    debug!(rows = out.len(), changed, "normalized theme names");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::MAJOR_THEMES;
    use serde_json::{json, Value};

    fn row(code: &str, name: &str) -> ThemeRow {
        ThemeRow {
            code: Value::from(code),
            name: name.to_string(),
            id: Value::String("P1".to_string()),
            record: 0,
        }
    }

    #[test]
    fn test_fills_missing_names() {
        let out = normalize_names(
            vec![row("1", ""), row("2", "Public sector governance")],
            &MAJOR_THEMES,
        );
        let expected = json!([
            {"code": "1", "name": "Economic management", "id": "P1"},
            {"code": "2", "name": "Public sector governance", "id": "P1"}
        ]);
        assert_eq!(serde_json::to_value(&out).unwrap(), expected);
    }

    #[test]
    fn test_table_overrides_disagreeing_name() {
        let out = normalize_names(vec![row("8", "Health")], &MAJOR_THEMES);
        assert_eq!(out[0].name, "Human development");
    }

    #[test]
    fn test_unknown_codes_untouched() {
        let input = vec![row("42", "Something else"), row("", ""), row("3 ", "")];
        let out = normalize_names(input.clone(), &MAJOR_THEMES);
        assert_eq!(out, input);
    }

    #[test]
    fn test_numeric_code_passes_through() {
        let mut numeric = row("1", "orig");
        numeric.code = json!(1);
        let out = normalize_names(vec![numeric.clone(), row("1", "")], &MAJOR_THEMES);
        assert_eq!(out[0], numeric);
        assert_eq!(out[1].name, "Economic management");
    }

    #[test]
    fn test_idempotent() {
        let input = vec![row("1", ""), row("10", "rural"), row("99", "x"), row("5", "")];
        let once = normalize_names(input, &MAJOR_THEMES);
        let twice = normalize_names(once.clone(), &MAJOR_THEMES);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_custom_table() {
        let table = CodeNameTable::new([("a", "Alpha")]);
        let out = normalize_names(vec![row("a", ""), row("1", "")], &table);
        assert_eq!(out[0].name, "Alpha");
        assert_eq!(out[1].name, "");
    }
}
