//! Contains epsilon-box dominance comparison and the archive built on top of it.

mod archive;
pub use self::archive::*;

mod comparator;
pub use self::comparator::*;
