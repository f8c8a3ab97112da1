//! Pointer interaction shared by every clickable element.
//!
//! Each widget owns a `PointerState` and feeds it the current `Frame` once per
//! tick. Widget variants (`TextWidget`, `ImageWidget`) compose the state machine
//! instead of specialising a common base.

mod pointer;
mod widget;

pub use pointer::*;
pub use widget::*;
