//! Component system for the Folio TUI.
//!
//! Components are self-contained UI elements that handle their own input,
//! react to application messages, and render themselves into a provided
//! `Rect`. They never perform side effects directly; anything that leaves
//! the process (clipboard, mail composer, preferences) or moves the viewport
//! on a timeline is reported back as an [`Effect`].

use crossterm::event::{KeyEvent, MouseEvent};
use folio_types::{Effect, Msg};
use ratatui::{Frame, layout::Rect, text::Span};

use crate::app::App;

/// A trait representing a UI component with its own state and behavior.
///
/// # Component Lifecycle
///
/// 1. **Event Handling**: input arrives through `handle_key_events()` and `handle_mouse_events()`
/// 2. **State Updates**: `update()` processes application messages
/// 3. **Rendering**: `render()` draws the component into the provided frame area
pub(crate) trait Component {
    /// Handle key events when the component is focused.
    ///
    /// Returns the effects the runtime should execute.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events that land inside the component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Update internal state based on an application message.
    fn update(&mut self, _app: &mut App, _msg: &Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into `rect`.
    ///
    /// Takes `&mut App` so components can record hit-test areas for mouse input.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the footer while this component is focused.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'static>> {
        Vec::new()
    }
}

/// Returns the index of the item rect containing `(x, y)`, if the point is inside `container`.
pub fn find_target_index_by_mouse_position(container: &Rect, items: &[Rect], x: u16, y: u16) -> Option<usize> {
    let position = ratatui::layout::Position::new(x, y);
    if !container.contains(position) {
        return None;
    }
    items.iter().position(|item| item.contains(position))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_hit_testing_respects_container() {
        let container = Rect::new(0, 0, 40, 3);
        let items = [Rect::new(1, 1, 10, 1), Rect::new(12, 1, 10, 1)];
        assert_eq!(find_target_index_by_mouse_position(&container, &items, 13, 1), Some(1));
        assert_eq!(find_target_index_by_mouse_position(&container, &items, 11, 1), None);
        assert_eq!(find_target_index_by_mouse_position(&container, &items, 13, 5), None);
    }
}
