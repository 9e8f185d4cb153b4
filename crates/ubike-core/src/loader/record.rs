// crates/ubike-core/src/loader/record.rs

//! Maps feed objects onto [`StationRecord`]s.
//!
//! Required keys must be present with the right JSON type. Optional keys may
//! be absent or `null`. Anything else in the object is ignored.

use crate::error::{DataSourceError, MalformedRecordError, RecordProblem, Result};
use crate::model::StationRecord;
use serde_json::{Map, Value};

/// Converts a parsed document into records, keeping array order.
pub fn parse_records(doc: Value) -> Result<Vec<StationRecord>> {
    let items = match doc {
        Value::Array(items) => items,
        other => {
            return Err(DataSourceError::NotAnArray {
                found: json_type(&other),
            }
            .into())
        }
    };

    let records = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            parse_record(item).map_err(|problem| MalformedRecordError { index, problem })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(records)
}

fn parse_record(item: &Value) -> std::result::Result<StationRecord, RecordProblem> {
    let obj = item.as_object().ok_or(RecordProblem::NotAnObject {
        found: json_type(item),
    })?;

    let id = required_str(obj, "sno")?;
    if id.is_empty() {
        return Err(RecordProblem::Empty { field: "sno" });
    }

    Ok(StationRecord {
        id,
        name_local: required_str(obj, "sna")?,
        name_en: required_str(obj, "snaen")?,
        address_local: required_str(obj, "ar")?,
        address_en: required_str(obj, "aren")?,
        area_local: required_str(obj, "sarea")?,
        area_en: required_str(obj, "sareaen")?,
        bikes_available: required_count(obj, "available_rent_bikes")?,
        spots_available: required_count(obj, "available_return_bikes")?,
        latitude: optional_f64(obj, "latitude")?,
        longitude: optional_f64(obj, "longitude")?,
        updated_at: optional_str(obj, "updateTime")?,
        active: optional_str(obj, "act")?.map(|act| act == "1"),
    })
}

fn required<'a>(
    obj: &'a Map<String, Value>,
    field: &'static str,
) -> std::result::Result<&'a Value, RecordProblem> {
    obj.get(field).ok_or(RecordProblem::MissingField { field })
}

/// `None` for an absent key or an explicit `null`.
fn optional<'a>(obj: &'a Map<String, Value>, field: &'static str) -> Option<&'a Value> {
    obj.get(field).filter(|v| !v.is_null())
}

fn as_str(v: &Value, field: &'static str) -> std::result::Result<String, RecordProblem> {
    v.as_str().map(str::to_owned).ok_or(RecordProblem::WrongType {
        field,
        expected: "a string",
        found: json_type(v),
    })
}

fn required_str(
    obj: &Map<String, Value>,
    field: &'static str,
) -> std::result::Result<String, RecordProblem> {
    as_str(required(obj, field)?, field)
}

fn optional_str(
    obj: &Map<String, Value>,
    field: &'static str,
) -> std::result::Result<Option<String>, RecordProblem> {
    optional(obj, field).map(|v| as_str(v, field)).transpose()
}

fn required_count(
    obj: &Map<String, Value>,
    field: &'static str,
) -> std::result::Result<u32, RecordProblem> {
    let v = required(obj, field)?;
    v.as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or(RecordProblem::WrongType {
            field,
            expected: "a non-negative integer",
            found: json_type(v),
        })
}

fn optional_f64(
    obj: &Map<String, Value>,
    field: &'static str,
) -> std::result::Result<Option<f64>, RecordProblem> {
    optional(obj, field)
        .map(|v| {
            v.as_f64().ok_or(RecordProblem::WrongType {
                field,
                expected: "a number",
                found: json_type(v),
            })
        })
        .transpose()
}

/// Human name of a JSON value's type, for diagnostics.
fn json_type(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
