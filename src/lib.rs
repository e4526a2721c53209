pub mod args;
pub mod db;
pub mod export;
pub mod logging;
pub mod roster;
pub mod scoring;
pub mod stats;
pub mod ui;
