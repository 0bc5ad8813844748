pub mod d410_product_performance;
