//! Screen content
//!
//! Home, Settings and Profile are placeholder screens showing a single line of
//! text. The shopping list screen is built by [`crate::shopping_list`].

use serde::Serialize;

use crate::navigation::Screen;
use crate::shopping_list::ShoppingListView;

/// A screen that only shows a fixed message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticScreen {
    /// Which screen this is
    pub screen: Screen,
    /// Text shown on the screen
    pub message: &'static str,
}

impl StaticScreen {
    /// Build the placeholder for a screen, or `None` for the shopping list
    pub fn for_screen(screen: Screen) -> Option<Self> {
        let message = match screen {
            Screen::Home => "This is Home Screen",
            Screen::Profile => "This is Profile screen",
            Screen::Settings => "This is settings screen",
            Screen::ShoppingList => return None,
        };
        Some(Self { screen, message })
    }
}

/// What the content area below the top bar shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "view", rename_all = "camelCase")]
pub enum ScreenContent {
    /// A placeholder screen
    Static(StaticScreen),
    /// The shopping list
    ShoppingList(ShoppingListView),
}

impl ScreenContent {
    /// Which screen this content belongs to
    pub fn screen(&self) -> Screen {
        match self {
            ScreenContent::Static(placeholder) => placeholder.screen,
            ScreenContent::ShoppingList(_) => Screen::ShoppingList,
        }
    }
}
