pub mod connect;
pub mod lock;

pub use connect::{connect, ping};
