pub mod hit_testing;
pub mod snap;

pub use hit_testing::{find_vertex_near, DEFAULT_HIT_RADIUS};
pub use snap::snap;
