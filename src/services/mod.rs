pub mod preview;
pub mod reorder;
pub mod response_store;

pub use preview::{question_count_badge, render_preview};
pub use reorder::{
    should_commit_move, DragDirection, DragSession, HoverThreshold, DEFAULT_DEAD_ZONE,
};
pub use response_store::{ResponseScratchStore, ScratchResponse};
