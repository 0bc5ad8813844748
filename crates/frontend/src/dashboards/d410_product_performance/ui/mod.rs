mod dashboard;
mod insights_panel;
mod quadrant_panel;
mod summary_cards;

pub use dashboard::ProductPerformanceDashboard;
