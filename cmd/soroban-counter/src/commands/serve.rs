use std::{fmt::Debug, net::SocketAddr, sync::Arc};

use clap::Parser;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::sync::Mutex;
use warp::{hyper::body::Bytes, Filter, Rejection, Reply};

use super::{instance, ledger_file, HEADING_SANDBOX};
use crate::{
    counter::{self, OverflowPolicy},
    hello::hello,
    jsonrpc::{self, Response},
    print::Print,
};

#[derive(Parser, Debug, Clone)]
#[group(skip)]
pub struct Cmd {
    /// Port to listen on
    #[arg(long, env = "SOROBAN_PORT", default_value_t = 8080)]
    pub port: u16,

    // Instance used when a request does not name one
    #[command(flatten)]
    pub instance: instance::Args,

    /// What to do when the counter is already at its maximum value
    #[arg(
        long,
        value_enum,
        env = "SOROBAN_OVERFLOW",
        default_value_t = OverflowPolicy::Fail,
        help_heading = HEADING_SANDBOX,
    )]
    pub overflow: OverflowPolicy,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Ledger(#[from] ledger_file::Error),
    #[error(transparent)]
    Counter(#[from] counter::Error),
    #[error("invalid params: {0}")]
    InvalidParams(#[from] serde_json::Error),
    #[error("missing params for method {0}")]
    MissingParams(String),
    #[error("invalid params: contract id must not be empty")]
    EmptyContractId,
    #[error("unknown method {0}")]
    UnknownMethod(String),
    #[error("cannot start server: {0}")]
    Bind(#[from] warp::Error),
}

impl Error {
    pub fn code(&self) -> i64 {
        match self {
            Error::UnknownMethod(_) => jsonrpc::METHOD_NOT_FOUND,
            Error::InvalidParams(_) | Error::MissingParams(_) | Error::EmptyContractId => {
                jsonrpc::INVALID_PARAMS
            }
            Error::Ledger(_) | Error::Counter(_) | Error::Bind(_) => jsonrpc::INTERNAL_ERROR,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct InstanceParams {
    id: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct HelloParams {
    to: String,
}

/// Request handler shared by every connection.
///
/// Every request that touches the ledger holds `lock` for its whole
/// read-modify-write, so concurrent `increase` calls are applied one at a time.
pub struct Server {
    instance: instance::Args,
    overflow: OverflowPolicy,
    lock: Mutex<()>,
}

impl Server {
    pub fn new(instance: instance::Args, overflow: OverflowPolicy) -> Self {
        Self {
            instance,
            overflow,
            lock: Mutex::new(()),
        }
    }

    /// Decodes a raw request body and handles it. A body that is not JSON, or
    /// not a request object, still gets a JSON-RPC error response.
    pub async fn handle_body(&self, body: &[u8]) -> Response<Value, Value> {
        let value: Value = match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(e) => {
                return Response::err(None, jsonrpc::PARSE_ERROR, format!("Parse error: {e}"))
            }
        };
        let id = value
            .get("id")
            .and_then(|id| serde_json::from_value::<jsonrpc::Id>(id.clone()).ok());
        match serde_json::from_value::<jsonrpc::Request<Value>>(value) {
            Ok(request) => self.handle(request).await,
            Err(e) => Response::err(
                id,
                jsonrpc::INVALID_REQUEST,
                format!("Invalid request: {e}"),
            ),
        }
    }

    pub async fn handle(&self, request: jsonrpc::Request<Value>) -> Response<Value, Value> {
        let id = request.id;
        if request.jsonrpc != jsonrpc::VERSION {
            return Response::err(
                id,
                jsonrpc::INVALID_REQUEST,
                "Invalid jsonrpc value in request",
            );
        }
        tracing::debug!(method = %request.method, "rpc request");
        match self.dispatch(&request.method, request.params).await {
            Ok(result) => Response::ok(id, result),
            Err(e) => {
                tracing::debug!(method = %request.method, error = %e, "rpc request failed");
                Response::err(id, e.code(), e.to_string())
            }
        }
    }

    async fn dispatch(&self, method: &str, params: Option<Value>) -> Result<Value, Error> {
        match method {
            "get" => {
                let contract_id = self.contract_id(params)?;
                let _guard = self.lock.lock().await;
                let state = self.instance.ledger.read()?;
                Ok(json!(instance::count(&state, &contract_id)))
            }
            "increase" => {
                let contract_id = self.contract_id(params)?;
                let _guard = self.lock.lock().await;
                let mut state = self.instance.ledger.read()?;
                counter::increase(state.instance_mut(&contract_id), self.overflow)?;
                state.bump_sequence();
                self.instance.ledger.write(&state)?;
                tracing::info!(
                    contract_id = %contract_id,
                    "count: {}",
                    instance::count(&state, &contract_id)
                );
                Ok(Value::Null)
            }
            "hello" => {
                let params = params.ok_or_else(|| Error::MissingParams(method.to_string()))?;
                let HelloParams { to } = serde_json::from_value(params)?;
                Ok(json!(hello(&to)))
            }
            _ => Err(Error::UnknownMethod(method.to_string())),
        }
    }

    fn contract_id(&self, params: Option<Value>) -> Result<String, Error> {
        let params: InstanceParams = match params {
            Some(p) => serde_json::from_value(p)?,
            None => InstanceParams::default(),
        };
        match params.id {
            Some(id) if id.is_empty() => Err(Error::EmptyContractId),
            Some(id) => Ok(id),
            None => Ok(self.instance.contract_id.clone()),
        }
    }
}

/// `POST /rpc`, answered by `server`.
pub fn routes(
    server: Arc<Server>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let with_server = warp::any().map(move || server.clone());
    warp::post()
        .and(warp::path("rpc"))
        .and(warp::path::end())
        .and(warp::body::bytes())
        .and(with_server)
        .then(|body: Bytes, server: Arc<Server>| async move {
            warp::reply::json(&server.handle_body(&body).await)
        })
}

impl Cmd {
    pub async fn run(&self, print: &Print) -> Result<(), Error> {
        let server = Arc::new(Server::new(self.instance.clone(), self.overflow));
        let rpc = routes(server);

        let addr: SocketAddr = ([127, 0, 0, 1], self.port).into();
        let (addr, serving) =
            warp::serve(rpc).try_bind_with_graceful_shutdown(addr, async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::warn!("cannot listen for shutdown signal: {e}");
                }
            })?;
        print.globeln(format!("Listening on: http://{addr}/rpc"));
        tracing::debug!(ledger_file = ?self.instance.ledger.ledger_file, "serving ledger");
        serving.await;
        Ok(())
    }
}
