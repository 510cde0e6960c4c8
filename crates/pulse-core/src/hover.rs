// File: crates/pulse-core/src/hover.rs
// Summary: Hover tracking that resolves primitives to tooltip text.

use crate::render::HoverTarget;
use crate::series::AlignedRow;
use crate::tooltip::format_tooltip;

/// Pointer transition over a primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum HoverEvent {
    Enter(HoverTarget),
    Exit,
}

/// Tracks which primitive the pointer is over. Enter yields tooltip text
/// for the primitive's (row, metric) reference; exit clears it. No other
/// state lives here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HoverState {
    current: Option<HoverTarget>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently hovered target, if any.
    pub fn current(&self) -> Option<&HoverTarget> {
        self.current.as_ref()
    }

    /// Apply a hover transition. Enter returns the tooltip to display
    /// (None when the target row no longer exists); exit clears the state
    /// and returns None.
    pub fn on_event(&mut self, event: HoverEvent, rows: &[AlignedRow]) -> Option<String> {
        match event {
            HoverEvent::Enter(target) => {
                let text =
                    rows.get(target.row_index).map(|row| format_tooltip(row, &target.metric));
                self.current = Some(target);
                text
            }
            HoverEvent::Exit => {
                self.current = None;
                None
            }
        }
    }
}
