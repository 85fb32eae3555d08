//! Auth domain actions - business logic functions
//!
//! Actions are async functions called directly from HTTP routes.

mod login;

pub use login::{login, LoginResult};
