pub mod ports;
pub mod sections;
pub mod services;
