//! Input handling for the list box.

use termgrid::{Event, Key, MouseButton};

use crate::notify::SelectKind;
use crate::state::ListBox;

impl ListBox {
    /// Process one input event.
    ///
    /// Returns false when the event was not used, so the host can offer it to
    /// an ancestor. A list box that is unfocused or disabled declines
    /// everything.
    ///
    /// Enter is declined when nothing is selected. With a selection it is
    /// always consumed, whether or not a callback is registered.
    pub fn process_event(&mut self, event: &Event) -> bool {
        if !self.active || !self.enabled {
            return false;
        }

        log::trace!("{}: {:?}", self.id(), event);
        match event {
            Event::Key { key, .. } => self.handle_key(*key),
            Event::Click { x, y, button } | Event::Drag { x, y, button } => {
                if *button != MouseButton::Left {
                    return false;
                }
                self.handle_click(*x, *y)
            }
            Event::Scroll { delta, .. } => self.handle_wheel(*delta),
            Event::Resize { .. } => false,
        }
    }

    fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Home => self.home(),
            Key::End => self.end(),
            Key::Up => self.move_up(),
            Key::Down => self.move_down(),
            Key::Enter => return self.notify(SelectKind::Confirmed),
            _ => return false,
        }
        true
    }

    fn handle_wheel(&mut self, delta: i16) -> bool {
        for _ in 0..delta.unsigned_abs() {
            if delta < 0 {
                self.move_up();
            } else {
                self.move_down();
            }
        }
        true
    }

    /// Left click or drag at absolute `(x, y)`. Every click that reaches the
    /// list box is consumed, even one that hits no item.
    fn handle_click(&mut self, x: u16, y: u16) -> bool {
        let (dx, dy) = self.rect.to_local(x, y);
        let width = i32::from(self.rect.width);
        let height = i32::from(self.rect.height);

        if dy < 0 || dy >= height || dx < 0 || dx >= width {
            return true;
        }

        if dx == width - 1 {
            if dy == 0 {
                self.move_up();
            } else if dy == height - 1 {
                self.move_down();
            } else if self.items.len() >= 2 {
                self.scroll_to_row(dy as u16);
            }
            return true;
        }

        let index = self.top_line + dy as usize;
        if index >= self.items.len() {
            return true;
        }

        self.select_item(index);
        self.notify(SelectKind::Changed);
        true
    }
}
