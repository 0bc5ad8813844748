pub mod performance_category;

pub use performance_category::PerformanceCategory;
