pub mod connection;
pub mod manager;
pub mod port_validator;

pub use connection::{Connection, ConnectionState};
pub use manager::{ConnectionManager, ConnectionStats};
pub use port_validator::PortValidator;
