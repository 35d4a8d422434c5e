//! Request-scoped helpers shared by the controllers.

pub mod auth;
pub mod client_ip;
pub mod session;

#[cfg(test)]
mod test;
