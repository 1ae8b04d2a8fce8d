pub mod cli;
pub mod conf;
pub mod headers;
pub mod logging;
pub mod normalization;
pub mod target;
