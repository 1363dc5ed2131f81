mod files;
mod snapshot;

pub use files::*;
pub use snapshot::*;
