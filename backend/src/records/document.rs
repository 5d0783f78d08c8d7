// src/records/document.rs
//
// Conversion between records and stored documents.
//
// A stored document is the record's JSON object with `timestamp` held as
// ISO-8601 text. Fields the record does not know about are ignored on read.

use serde_json::Value;

use crate::db::StoreError;
use crate::records::models::Record;
use crate::timestamp::{parse_iso, to_iso};

const TIMESTAMP_FIELD: &str = "timestamp";

pub fn encode<R: Record>(record: &R) -> Result<Value, StoreError> {
    let mut doc = serde_json::to_value(record)?;

    match doc.as_object_mut() {
        Some(fields) => {
            fields.insert(
                TIMESTAMP_FIELD.to_string(),
                Value::String(to_iso(record.timestamp())),
            );
        }
        None => return Err(malformed::<R>("record did not serialise to an object".to_string())),
    }

    Ok(doc)
}

pub fn decode<R: Record>(mut doc: Value) -> Result<R, StoreError> {
    match doc.as_object_mut() {
        Some(fields) => {
            if let Some(Value::String(raw)) = fields.get(TIMESTAMP_FIELD) {
                let ts = parse_iso(raw)?;
                // chrono's deserializer wants RFC 3339
                fields.insert(TIMESTAMP_FIELD.to_string(), Value::String(ts.to_rfc3339()));
            }
        }
        None => return Err(malformed::<R>(format!("expected an object, found {}", doc))),
    }

    Ok(serde_json::from_value(doc)?)
}

fn malformed<R: Record>(reason: String) -> StoreError {
    StoreError::Malformed {
        collection: R::COLLECTION.as_str(),
        reason,
    }
}
