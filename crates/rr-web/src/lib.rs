pub mod app;
pub mod components;
pub mod islands;
pub mod pages;
pub mod server_fns;
pub mod utils;

#[cfg(feature = "ssr")]
pub mod server;
