use ratatui::Frame;
use ratatui::layout::Rect;

use super::event::TuiEvent;

/// Something that draws itself into part of the screen.
///
/// Stateless pieces (sidebar, header, landing page) are built from props
/// each frame. Stateful ones borrow their persistent state from `TuiState`,
/// which is why rendering takes `&mut self`: measurements and scroll
/// offsets get refreshed while drawing.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Turns raw input into a component-level event, if the component cares.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
