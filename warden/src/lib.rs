pub mod config;
pub mod controller;
mod error;

pub use error::WardenError;
pub use warden_idp as idp;
pub use warden_session as session;
