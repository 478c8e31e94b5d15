pub mod case;
pub mod config;
pub mod gauge;
pub mod logs;
pub mod plot;
pub mod profiles;
pub mod services;
pub mod utils;
