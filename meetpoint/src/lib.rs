pub mod algorithm;
pub mod app;
pub mod config;
pub mod graph;
pub mod model;
pub mod service;
