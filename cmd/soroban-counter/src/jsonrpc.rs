use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub const VERSION: &str = "2.0";

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;

#[derive(Debug, PartialEq, Clone, Hash, Eq, Deserialize, Serialize, PartialOrd, Ord)]
#[serde(untagged)]
pub enum Id {
    /// Null
    Null,
    /// Numeric id
    Number(i64),
    /// String id
    Str(String),
}

/// JSON-RPC request object as defined in the [spec](https://www.jsonrpc.org/specification#request_object).
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Request<T> {
    /// JSON-RPC version.
    pub jsonrpc: String,
    /// Request ID
    pub id: Option<Id>,
    /// Name of the method to be invoked.
    pub method: String,
    /// Parameter values of the request.
    pub params: Option<T>,
}

/// JSON-RPC Response object as defined in the [spec](https://www.jsonrpc.org/specification#response_object).
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(untagged)]
pub enum Response<T, E> {
    Ok(ResultResponse<T>),
    Err(ErrorResponse<E>),
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ResultResponse<T> {
    pub jsonrpc: String,
    pub id: Id,
    pub result: T,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ErrorResponse<T> {
    pub jsonrpc: String,
    pub id: Id,
    pub error: ErrorResponseError<T>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ErrorResponseError<T> {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T, E> Response<T, E> {
    pub fn ok(id: Option<Id>, result: T) -> Self {
        Response::Ok(ResultResponse {
            jsonrpc: VERSION.to_string(),
            id: id.unwrap_or(Id::Null),
            result,
        })
    }

    pub fn err(id: Option<Id>, code: i64, message: impl Into<String>) -> Self {
        Response::Err(ErrorResponse {
            jsonrpc: VERSION.to_string(),
            id: id.unwrap_or(Id::Null),
            error: ErrorResponseError {
                code,
                message: message.into(),
                data: None,
            },
        })
    }
}
