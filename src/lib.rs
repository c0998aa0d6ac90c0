//! hostcrab
//!
//! A small HTTP API for managing the static host records served by a [dnsmasq] resolver.
//!
//! Records live in a flat `<ip> <hostname>` file loaded by dnsmasq's `addn-hosts` option.
//! Authenticated clients can [list, add and delete][api] records; after an add the resolver
//! is [reloaded][reload] so the new name resolves immediately.
//!
//! [dnsmasq]: https://thekelleys.org.uk/dnsmasq/doc.html
//!
#![warn(clippy::pedantic)]

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod host_store;
pub mod reload;

pub use api::new as new_http;
pub use auth::{TokenSigner, UserList};
pub use config::{Config, SharedConfig};
pub use host_store::FileHostStore;
pub use reload::CommandReloader;
