pub mod jwt;
pub mod password;
mod types;

pub use jwt::TokenService;
pub use types::{Claims, TokenBundle};
