//! User interface model for the shopping list app
//!
//! This crate is the presentation adapter between a rendering toolkit and the
//! shopping list store. It holds everything the screen needs that is not part
//! of the list itself (drawer navigation, dialog visibility, text typed into
//! input fields) and turns store snapshots into view models.
//!
//! # Modules
//!
//! - [`navigation`] - Drawer screens and selection state
//! - [`screens`] - Static screens and the screen content switch
//! - [`shopping_list`] - Add dialog and inline edit drafts for the list screen
//! - [`shell`] - Top-level app shell tying navigation and screens together
//!
//! # Example
//!
//! ```rust
//! use app_ui::{AppShell, Screen, ScreenContent};
//!
//! let mut shell = AppShell::new();
//! shell.shopping_list_mut().open_add_dialog();
//! shell.shopping_list_mut().set_draft_name("Milk");
//! shell.shopping_list_mut().set_draft_quantity("2");
//! shell.shopping_list_mut().confirm_add().unwrap();
//!
//! let view = shell.view();
//! assert_eq!(view.title, "Shopping List");
//! match view.content {
//!     ScreenContent::ShoppingList(list) => assert_eq!(list.rows.len(), 1),
//!     _ => unreachable!(),
//! }
//!
//! shell.select(Screen::Home);
//! assert!(!shell.view().show_add_button);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod navigation;
pub mod screens;
pub mod shell;
pub mod shopping_list;

// Re-export commonly used types
pub use navigation::{DrawerItem, DrawerState, NavigationState, Screen};
pub use screens::{ScreenContent, StaticScreen};
pub use shell::{AppShell, DrawerView, ShellView};
pub use shopping_list::{
    AddItemDialogView, AddItemDraft, DraftError, EditDraft, ItemRow, ShoppingListScreen,
    ShoppingListView,
};
