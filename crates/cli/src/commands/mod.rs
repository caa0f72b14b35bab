pub mod format;
pub mod functions;
pub mod summary;

pub use format::*;
pub use functions::*;
pub use summary::*;
