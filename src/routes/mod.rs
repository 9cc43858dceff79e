mod health_check;

// re-export
pub use health_check::*;
