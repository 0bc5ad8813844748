pub mod d410_product_performance;

pub use d410_product_performance::ui::ProductPerformanceDashboard;
