//! component-store - validates, indexes and serves UI component source
//!
//! Submitted component code goes through the acceptance pipeline in
//! [`components`] (size and import checks, id generation, props schema
//! extraction) before it is handed to a [`store::ComponentStore`].

pub mod cli;
pub mod components;
pub mod http_server;
pub mod logging;
pub mod store;

pub use components::{accept, extract, validate, ComponentRecord, PropsSchema};
