pub mod config;
pub mod logging;

pub mod control;
pub mod crawler;
pub mod fetch;
pub mod frontier;
pub mod links;
pub mod retry;
pub mod storage;
pub mod url_model;
