pub mod analysis;
pub mod cli;
pub mod config;
pub mod ctx;
pub mod error;
pub mod incident;
pub mod io;
pub mod math;
pub mod pipeline;
pub mod region;
pub mod report;
pub mod schema;
pub mod source;
