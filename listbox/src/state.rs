//! List box state: items, selection and viewport.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use termgrid::{Color, Rect};

use crate::config::ListBoxConfig;
use crate::error::ConfigError;
use crate::notify::{DispatchMode, Notifier, SelectEvent, SelectKind};
use crate::scrollbar;

/// Unique identifier for a ListBox instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListBoxId(usize);

impl ListBoxId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for ListBoxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__listbox_{}", self.0)
    }
}

/// Per-widget colors that take precedence over the theme.
/// `Color::Default` leaves the theme in charge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorOverrides {
    pub text: Color,
    pub back: Color,
    /// Selected row text.
    pub active_text: Color,
    /// Selected row background.
    pub active_back: Color,
}

/// A scrollable list of strings with a single selection.
///
/// Invariants, restored before every public method returns:
/// - the selection, when present, indexes an existing item and lies inside
///   the viewport;
/// - `top_line` is 0 while every item fits, otherwise it is at most
///   `item_count() - height`;
/// - with a non-zero `max_items`, `item_count() <= max_items`.
///
/// The rightmost column is the scrollbar, so items get `width - 1` columns
/// and all `height` rows.
#[derive(Debug)]
pub struct ListBox {
    id: ListBoxId,
    pub(crate) items: VecDeque<String>,
    pub(crate) selection: Option<usize>,
    pub(crate) top_line: usize,
    max_items: usize,
    pub(crate) rect: Rect,
    /// Last computed thumb row, or the row of the last track click.
    pub(crate) thumb_row: Option<u16>,
    pub(crate) active: bool,
    pub(crate) enabled: bool,
    tab_stop: bool,
    pub(crate) colors: ColorOverrides,
    notifier: Notifier,
}

impl ListBox {
    /// Create an empty list box. Zero dimensions are raised to 1.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            id: ListBoxId::new(),
            items: VecDeque::new(),
            selection: None,
            top_line: 0,
            max_items: 0,
            rect: Rect::from_size(width.max(1), height.max(1)),
            thumb_row: None,
            active: false,
            enabled: true,
            tab_stop: true,
            colors: ColorOverrides::default(),
            notifier: Notifier::new(DispatchMode::default()),
        }
    }

    pub fn from_config(config: &ListBoxConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let (width, height) = config.resolved_size();

        let mut list = Self::new(width, height);
        list.max_items = config.max_items;
        list.tab_stop = config.tab_stop;
        list.notifier.set_mode(config.dispatch);
        Ok(list)
    }

    pub fn id(&self) -> ListBoxId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Geometry and flags
    // -------------------------------------------------------------------------

    pub fn pos(&self) -> (u16, u16) {
        (self.rect.x, self.rect.y)
    }

    /// Move the top-left corner. Mouse events are interpreted relative to it.
    pub fn set_pos(&mut self, x: u16, y: u16) {
        self.rect.x = x;
        self.rect.y = y;
    }

    pub fn size(&self) -> (u16, u16) {
        (self.rect.width, self.rect.height)
    }

    /// Resize the control and scroll so the selection stays visible.
    pub fn set_size(&mut self, width: u16, height: u16) {
        self.rect.width = width.max(1);
        self.rect.height = height.max(1);
        self.repair_viewport();
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub(crate) fn viewport_height(&self) -> usize {
        self.rect.height as usize
    }

    /// Whether the control has input focus.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn tab_stop(&self) -> bool {
        self.tab_stop
    }

    pub fn set_tab_stop(&mut self, tab_stop: bool) {
        self.tab_stop = tab_stop;
    }

    pub fn colors(&self) -> ColorOverrides {
        self.colors
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.colors.text = color;
    }

    pub fn set_back_color(&mut self, color: Color) {
        self.colors.back = color;
    }

    pub fn set_active_text_color(&mut self, color: Color) {
        self.colors.active_text = color;
    }

    pub fn set_active_back_color(&mut self, color: Color) {
        self.colors.active_back = color;
    }

    /// Index of the first visible item.
    pub fn top_line(&self) -> usize {
        self.top_line
    }

    /// Cached scrollbar thumb row, relative to the top of the control.
    pub fn thumb_row(&self) -> Option<u16> {
        self.thumb_row
    }

    // -------------------------------------------------------------------------
    // Items
    // -------------------------------------------------------------------------

    /// Append an item. With a capacity set, the oldest items are evicted
    /// first so the list behaves as a bounded queue. Always succeeds.
    pub fn add_item(&mut self, text: impl Into<String>) -> bool {
        if self.max_items > 0 {
            while self.items.len() >= self.max_items {
                self.evict_oldest();
            }
        }

        self.items.push_back(text.into());
        self.sync_thumb();
        true
    }

    /// Remove the item at `index`. Returns false when `index` is out of range.
    ///
    /// The selection follows its item when an earlier item goes away. When
    /// the selected item itself is removed, the selection moves to the item
    /// that took its place, or to the new last item, or clears if the list
    /// is now empty.
    pub fn remove_item(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }

        self.items.remove(index);

        if let Some(selected) = self.selection {
            self.selection = if index < selected {
                Some(selected - 1)
            } else if self.items.is_empty() {
                None
            } else {
                Some(selected.min(self.items.len() - 1))
            };
        }
        if index < self.top_line {
            self.top_line -= 1;
        }

        self.repair_viewport();
        true
    }

    /// Remove every item and reset selection and scroll position.
    pub fn clear(&mut self) {
        self.items.clear();
        self.selection = None;
        self.top_line = 0;
        self.thumb_row = None;
    }

    /// First item equal to `text`.
    ///
    /// Exact matches always count. With `case_sensitive == false` an item
    /// that matches ignoring case counts too.
    pub fn find_item(&self, text: &str, case_sensitive: bool) -> Option<usize> {
        let folded = (!case_sensitive).then(|| text.to_lowercase());

        self.items.iter().position(|item| {
            item == text
                || folded
                    .as_deref()
                    .is_some_and(|needle| item.to_lowercase() == needle)
        })
    }

    pub fn item(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum retained items. 0 means unlimited.
    pub fn max_items(&self) -> usize {
        self.max_items
    }

    /// Set the capacity. Items beyond a new, smaller capacity are evicted
    /// oldest first right away.
    pub fn set_max_items(&mut self, max: usize) {
        self.max_items = max;
        if max > 0 && self.items.len() > max {
            while self.items.len() > max {
                self.evict_oldest();
            }
            self.sync_thumb();
        }
    }

    fn evict_oldest(&mut self) {
        log::debug!(
            "{}: capacity {} reached, evicting oldest item",
            self.id,
            self.max_items
        );
        self.remove_item(0);
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Select the item at `index` and scroll it into view.
    /// Returns false when `index` is out of range.
    pub fn select_item(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }

        self.selection = Some(index);
        self.ensure_visible();
        self.sync_thumb();
        true
    }

    pub fn selected_item(&self) -> Option<usize> {
        self.selection
    }

    /// Text of the selected item, or an empty string when nothing is selected.
    pub fn selected_item_text(&self) -> &str {
        self.selection
            .and_then(|index| self.items.get(index))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Register the selection callback, replacing any previous one.
    ///
    /// It is called off the input path; see [`DispatchMode`] for ordering.
    pub fn on_select<F>(&mut self, callback: F)
    where
        F: Fn(SelectEvent) + Send + Sync + 'static,
    {
        self.notifier.set_callback(Some(Arc::new(callback)));
    }

    /// Drop the selection callback.
    pub fn clear_on_select(&mut self) {
        self.notifier.set_callback(None);
    }

    pub fn dispatch_mode(&self) -> DispatchMode {
        self.notifier.mode()
    }

    pub fn set_dispatch_mode(&mut self, mode: DispatchMode) {
        self.notifier.set_mode(mode);
    }

    /// Raise a notification for the current selection, if there is one.
    pub(crate) fn notify(&mut self, kind: SelectKind) -> bool {
        let Some(index) = self.selection else {
            return false;
        };
        if !self.notifier.has_callback() {
            return true;
        }

        let event = SelectEvent {
            index,
            text: self.items[index].clone(),
            kind,
        };
        self.notifier.dispatch(event);
        true
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Select the first item and scroll to the top.
    pub fn home(&mut self) {
        if !self.items.is_empty() {
            self.selection = Some(0);
        }
        self.top_line = 0;
        self.sync_thumb();
    }

    /// Select the last item and show the last full page.
    pub fn end(&mut self) {
        let len = self.items.len();
        if len == 0 {
            return;
        }

        self.selection = Some(len - 1);
        let height = self.viewport_height();
        if len > height {
            self.top_line = len - height;
        }
        self.sync_thumb();
    }

    /// Select the previous item. With nothing selected, selects the first.
    pub fn move_up(&mut self) {
        match self.selection {
            None => {
                if self.items.is_empty() {
                    return;
                }
                self.selection = Some(0);
            }
            Some(0) => return,
            Some(selected) => self.selection = Some(selected - 1),
        }
        self.ensure_visible();
        self.sync_thumb();
    }

    /// Select the next item. With nothing selected, selects the first.
    pub fn move_down(&mut self) {
        let len = self.items.len();
        if len == 0 || self.selection == Some(len - 1) {
            return;
        }

        self.selection = Some(self.selection.map_or(0, |selected| selected + 1));
        self.ensure_visible();
        self.sync_thumb();
    }

    /// Scroll the least amount needed to bring the selection into view.
    ///
    /// Does nothing when nothing is selected or all items fit. Scrolling up
    /// puts the selection on the first row; scrolling down puts it on the
    /// last row, keeping the final page flush with the bottom.
    pub fn ensure_visible(&mut self) {
        let len = self.items.len();
        let height = self.viewport_height();
        let Some(selected) = self.selection else {
            return;
        };
        if len <= height {
            return;
        }

        if selected < self.top_line {
            self.top_line = selected;
        } else if selected - self.top_line >= height {
            let top = selected + 1 - height;
            self.top_line = if len - top > height { top } else { len - height };
        } else {
            return;
        }
        log::debug!(
            "{}: scrolled to line {} for selection {}",
            self.id,
            self.top_line,
            selected
        );
    }

    /// Select the item under track row `row` after a click or drag on the
    /// scrollbar, and remember `row` as the thumb position.
    pub(crate) fn scroll_to_row(&mut self, row: u16) {
        let height = self.rect.height;
        if let Some(index) = scrollbar::selection_at_row(row, self.items.len(), height) {
            self.selection = Some(index);
            self.ensure_visible();
        }
        self.thumb_row = Some(row);
    }

    /// Restore the viewport invariants after the item count or the height
    /// changed underneath the selection.
    fn repair_viewport(&mut self) {
        let len = self.items.len();
        let height = self.viewport_height();

        if self.selection.is_some_and(|selected| selected >= len) {
            self.selection = len.checked_sub(1);
        }
        self.top_line = if len <= height {
            0
        } else {
            self.top_line.min(len - height)
        };

        self.ensure_visible();
        self.sync_thumb();
    }

    fn sync_thumb(&mut self) {
        self.thumb_row =
            scrollbar::thumb_row(self.selection, self.items.len(), self.rect.height);
    }
}
