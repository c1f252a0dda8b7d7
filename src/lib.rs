pub mod app;
pub mod config;
pub mod form;
pub mod logger;
pub mod services;
pub mod signup;
pub mod validation;
