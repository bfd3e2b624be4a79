//! TOML query files
//!
//! String values become entries; nested tables are flattened by joining key
//! segments with `.`, so a `[findUser]` table with a `mysql` key yields the
//! entry `findUser.mysql`.

use super::LoadError;

/// Flatten a TOML table into `(key, sql)` pairs.
pub fn flatten_toml(table: ::toml::Table) -> Result<Vec<(String, String)>, LoadError> {
    let mut entries = Vec::with_capacity(table.len());
    flatten_into(None, table, &mut entries)?;
    Ok(entries)
}

fn flatten_into(
    prefix: Option<&str>,
    table: ::toml::Table,
    entries: &mut Vec<(String, String)>,
) -> Result<(), LoadError> {
    for (key, value) in table {
        let key = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key,
        };
        match value {
            ::toml::Value::String(sql) => entries.push((key, sql)),
            ::toml::Value::Table(nested) => flatten_into(Some(&key), nested, entries)?,
            other => {
                return Err(LoadError::NonStringValue {
                    key,
                    found: other.type_str(),
                });
            }
        }
    }
    Ok(())
}
