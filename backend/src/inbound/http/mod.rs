//! HTTP inbound adapter exposing REST endpoints.

pub mod accounts;
pub(crate) mod auth;
pub mod error;
pub mod health;
pub mod leaderboard_dto;
pub mod points;
pub mod schemas;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;
