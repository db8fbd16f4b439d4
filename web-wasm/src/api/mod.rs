mod analyze;

pub use analyze::analyze;
