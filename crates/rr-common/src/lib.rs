//! Types shared between the web UI (SSR and WASM) and the report service
//! client: the request/response wire contract and domain-list normalization.

pub mod domains;
pub mod types;
