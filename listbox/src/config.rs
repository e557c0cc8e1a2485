//! List box configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::notify::DispatchMode;

/// Width used when the width is [`Size::Auto`].
pub const AUTO_WIDTH: u16 = 5;
/// Height used when the height is [`Size::Auto`]: the two scroll arrows plus
/// one track row.
pub const AUTO_HEIGHT: u16 = 3;

/// A requested dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Size {
    Fixed(u16),
    /// Smallest size the control still works at.
    #[default]
    Auto,
}

impl Size {
    fn resolve(self, auto: u16) -> u16 {
        match self {
            Size::Fixed(n) => n,
            Size::Auto => auto,
        }
    }
}

/// Construction settings for a [`ListBox`](crate::ListBox).
///
/// # Example
///
/// ```
/// use listbox::{ListBox, ListBoxConfig, Size};
///
/// let config = ListBoxConfig::new()
///     .width(Size::Fixed(30))
///     .height(Size::Fixed(10))
///     .max_items(500);
/// let list = ListBox::from_config(&config).unwrap();
/// assert_eq!(list.size(), (30, 10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListBoxConfig {
    pub width: Size,
    pub height: Size,

    /// Maximum retained items, oldest evicted first. 0 = unlimited.
    pub max_items: usize,

    /// How selection notifications reach the callback.
    pub dispatch: DispatchMode,

    /// Whether focus traversal stops on this control.
    pub tab_stop: bool,
}

impl Default for ListBoxConfig {
    fn default() -> Self {
        Self {
            width: Size::Auto,
            height: Size::Auto,
            max_items: 0,
            dispatch: DispatchMode::default(),
            tab_stop: true,
        }
    }
}

impl ListBoxConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn max_items(mut self, max: usize) -> Self {
        self.max_items = max;
        self
    }

    pub fn dispatch(mut self, mode: DispatchMode) -> Self {
        self.dispatch = mode;
        self
    }

    pub fn tab_stop(mut self, tab_stop: bool) -> Self {
        self.tab_stop = tab_stop;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == Size::Fixed(0) {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == Size::Fixed(0) {
            return Err(ConfigError::ZeroHeight);
        }
        Ok(())
    }

    /// Concrete `(width, height)` with `Auto` resolved.
    pub fn resolved_size(&self) -> (u16, u16) {
        (
            self.width.resolve(AUTO_WIDTH),
            self.height.resolve(AUTO_HEIGHT),
        )
    }
}
