pub mod bundle;
pub mod environments;
pub mod error;
pub mod options;

// Re-export main types
pub use bundle::*;
pub use environments::*;
pub use error::*;
pub use options::*;
