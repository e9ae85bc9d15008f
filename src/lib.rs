pub mod camera;
pub mod coach;
pub mod config;
pub mod exercise;
pub mod pose;
pub mod speech;
pub mod trainer;
