//! State module for tracking walk progress
//!
//! - `WalkState`: whether the walk is fetching a page or done

mod walk_state;

pub use walk_state::WalkState;
