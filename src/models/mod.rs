pub mod admin;
pub mod compensation;
pub mod dataset;
pub mod development;
pub mod employee;
pub mod insight;
pub mod performance;
pub mod user;
pub mod views;
