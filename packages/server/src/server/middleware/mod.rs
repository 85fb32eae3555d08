// HTTP middleware
pub mod fault_boundary;
pub mod ip_extractor;
pub mod jwt_auth;
pub mod rate_limit;
pub mod security_headers;

pub use fault_boundary::*;
pub use ip_extractor::*;
pub use jwt_auth::*;
pub use rate_limit::*;
pub use security_headers::*;
