//! Reusable UI Components
//!
//! - `DialogFrame` - Centered dialog overlay with rounded borders

mod dialog_frame;

pub use dialog_frame::{calculate_total_dialog_height, render_dialog_frame, DialogFrameConfig};
