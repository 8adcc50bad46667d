//! # pokedex-service
//!
//! A plain-text HTTP/1.1 service over a read-only Pokédex snapshot.
//!
//! Requests are dispatched by [`handle`], a pure function from a [`Request`] to a [`Response`]
//! over a [`Dex`][`pokedex::dex::Dex`]. The [`Server`] accepts TCP connections, parses request
//! heads, and writes responses back, one task per connection.

mod config;
mod handler;
mod help;
mod http;
mod server;

pub use config::ServerConfig;
pub use handler::handle;
pub use help::HELP_TEXT;
pub use http::{
    Method,
    Query,
    Request,
    Response,
    StatusCode,
};
pub use server::{
    Server,
    ServerHandle,
};
