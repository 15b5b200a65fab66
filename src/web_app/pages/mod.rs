// web_app/pages/mod.rs - Page components module
//
// - TrackerPage: the price comparison widget

pub mod tracker;

// Re-export page components
pub use tracker::TrackerPage;
