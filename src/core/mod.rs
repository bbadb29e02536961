pub mod backup;
pub mod calculator;
pub mod clock;
pub mod config;
pub mod del;
pub mod live;
pub mod log;
pub mod logic;
pub mod report;
