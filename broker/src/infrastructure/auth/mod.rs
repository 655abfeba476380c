mod jwt;

pub use jwt::{Claims, JwtTokenVerifier};
