// Dashboard handlers
pub mod d402_sales_overview;

// Shared
pub mod indicators;
