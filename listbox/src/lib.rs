//! A selectable, scrollable list box for character-cell interfaces.
//!
//! [`ListBox`] keeps a list of strings, one active selection and a viewport
//! over the items. The host feeds it [`termgrid::Event`]s through
//! [`ListBox::process_event`] and calls [`ListBox::paint`] once per frame.
//! Selection notifications are delivered off the input path, see
//! [`DispatchMode`].

pub mod config;
pub mod error;
mod events;
pub mod notify;
mod render;
pub mod scrollbar;
mod state;

pub use config::{ListBoxConfig, Size};
pub use error::ConfigError;
pub use notify::{DispatchMode, SelectEvent, SelectKind};
pub use state::{ColorOverrides, ListBox, ListBoxId};
