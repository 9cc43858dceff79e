pub mod configuration;
pub mod database;
pub mod extensions;
pub mod routes;
pub mod session_state;
pub mod startup;
pub mod telemetry;
