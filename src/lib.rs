//! Data service behind the squad site: team and player listings plus the
//! contact form.

pub mod aggregate;
pub mod config;
pub mod db;
pub mod error;
pub mod form;
pub mod models;
pub mod routes;
