//! Record entities returned by the remote API

use crate::schema::{FieldSchema, StreamSchema};
use crate::types::JsonValue;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A record shape served by one endpoint of the remote API
pub trait Entity: DeserializeOwned + Serialize {
    /// Stream name in the catalog
    const STREAM_NAME: &'static str;

    /// Endpoint path relative to the base URL
    const ENDPOINT: &'static str;

    /// Declared field schema
    fn schema() -> StreamSchema;
}

/// Random phone number
///
/// Every field may be null or absent in a row; such fields are emitted as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub id: Option<i64>,
    pub uid: Option<String>,
    pub cell_phone: Option<String>,
}

impl Entity for PhoneNumber {
    const STREAM_NAME: &'static str = "PhoneNumber";
    const ENDPOINT: &'static str = "api/phone_number/random_phone_number";

    fn schema() -> StreamSchema {
        StreamSchema::new()
            .with_field("id", FieldSchema::big_integer())
            .with_field("uid", FieldSchema::string())
            .with_field("cell_phone", FieldSchema::string())
    }
}

/// Random medical code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Code {
    pub id: Option<i64>,
    pub uid: Option<String>,
    pub npi: Option<String>,
}

impl Entity for Code {
    const STREAM_NAME: &'static str = "Code";
    const ENDPOINT: &'static str = "api/code/random_code";

    fn schema() -> StreamSchema {
        StreamSchema::new()
            .with_field("id", FieldSchema::big_integer())
            .with_field("uid", FieldSchema::string())
            .with_field("npi", FieldSchema::string())
    }
}

/// Result of one fetch routine
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchOutcome {
    /// Decoded rows, re-serialized for emission
    pub records: Vec<JsonValue>,
    /// Why the body was discarded, when it could not be decoded
    pub decode_error: Option<String>,
}
