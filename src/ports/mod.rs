//! Port traits decoupling the domain from concrete adapters.

pub mod trade_port;
pub mod config_port;
pub mod report_port;
