//! Node builders.

mod box_widget;
mod column;
mod leaf;
mod row;

pub use box_widget::*;
pub use column::*;
pub use leaf::*;
pub use row::*;
