//! Record <-> JSON. Nothing in here touches the network.

use crate::record::EmployeeRecord;

/// Body of the create request: a single JSON object with the five fields.
pub fn encode_record(record: &EmployeeRecord) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec(record)
}

/// Body of a list response: a JSON array of records, order preserved.
pub fn decode_records(body: &[u8]) -> serde_json::Result<Vec<EmployeeRecord>> {
    serde_json::from_slice(body)
}

pub fn encode_records_pretty(records: &[EmployeeRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}
