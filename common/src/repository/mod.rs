pub mod owner_index;
pub mod repository_util;

pub use owner_index::OwnerIndex;
pub use repository_util::*;
