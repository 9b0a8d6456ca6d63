use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components follow the persistent state + transient render wrapper split:
/// persistent state lives in `TuiState`, and a wrapper built each frame
/// borrows it for rendering.
///
/// `render` takes `&mut self` to align with Ratatui's `StatefulWidget`
/// pattern (list selection offsets are updated during the render pass).
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events, emitting a high-level event its
/// parent acts on.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
