pub mod entry;
pub mod level;
pub mod template;

pub use entry::*;
pub use level::*;
pub use template::*;
