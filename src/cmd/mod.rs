mod index;
mod search;

pub use index::{index, index_bookmarks};
pub use search::{render_hit, search, search_bookmarks};
