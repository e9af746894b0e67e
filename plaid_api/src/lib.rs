//! Typed client for the Plaid accounts and balance endpoints.
//!
//! Calls flow through one pipeline: [`config::resolve`] merges per-call
//! configuration over the client's defaults, [`dispatch::dispatch`] posts the
//! credentials and parameters, and [`decode::decode`] maps the response onto
//! the schema registered for the [`Resource`].

mod client;
pub mod config;
pub mod decode;
pub mod dispatch;
mod errors;
pub mod request;
pub mod resource;
pub mod types;
pub use self::client::Client;
pub use self::config::{Config, Environment, ResolvedConfig, TlsVersion, TransportOptions};
pub use self::errors::Error;
pub use self::request::{AccountsBalanceGetRequest, AccountsGetRequest};
pub use self::resource::Resource;
