pub mod chart;
pub mod holding;
pub mod performance;
pub mod portfolio;
pub mod price;
pub mod settings;
