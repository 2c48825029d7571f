pub mod analysis;
pub mod dashboard;
pub mod notifier;
