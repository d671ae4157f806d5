pub mod client_config;
pub mod dashboard_error;
