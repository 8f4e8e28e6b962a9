pub mod client;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod logging;
pub mod responses;
pub mod router;
pub mod spreadsheets;
pub mod templates;

#[cfg(test)]
mod tests;
