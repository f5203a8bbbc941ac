//! App shell
//!
//! The shell is the top-level screen: a top bar titled after the current
//! screen, a side drawer for switching screens, a floating add button on the
//! shopping list, and the content area. The shopping list keeps its state
//! while other screens are showing.

use app_state::{config, ShoppingListStore, StoreConfig};
use serde::Serialize;

use crate::navigation::{DrawerItem, NavigationState, Screen, DRAWER_HEADER};
use crate::screens::{ScreenContent, StaticScreen};
use crate::shopping_list::ShoppingListScreen;

/// The side drawer as shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawerView {
    /// Whether the drawer is open
    pub open: bool,
    /// Drawer heading
    pub header: &'static str,
    /// Entries in order
    pub items: Vec<DrawerItem>,
}

/// Everything the shell renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellView {
    /// Top bar title
    pub title: &'static str,
    /// Side drawer
    pub drawer: DrawerView,
    /// Whether the floating add button is shown
    pub show_add_button: bool,
    /// Content area
    pub content: ScreenContent,
}

/// Top-level app state
#[derive(Debug, Clone, Default)]
pub struct AppShell {
    navigation: NavigationState,
    shopping_list: ShoppingListScreen,
}

impl AppShell {
    /// Create a shell with an empty shopping list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shell on top of an existing store
    pub fn with_store(store: ShoppingListStore) -> Self {
        Self {
            navigation: NavigationState::new(),
            shopping_list: ShoppingListScreen::new(store),
        }
    }

    /// Create a shell with a fresh store built from a configuration
    pub fn from_config(config: StoreConfig) -> config::Result<Self> {
        Ok(Self::with_store(ShoppingListStore::with_config(config)?))
    }

    /// Navigation state
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    /// Shopping list screen state
    pub fn shopping_list(&self) -> &ShoppingListScreen {
        &self.shopping_list
    }

    /// Mutable shopping list screen state
    pub fn shopping_list_mut(&mut self) -> &mut ShoppingListScreen {
        &mut self.shopping_list
    }

    /// Menu button pressed
    pub fn open_drawer(&mut self) {
        self.navigation.open_drawer();
    }

    /// Drawer dismissed
    pub fn close_drawer(&mut self) {
        self.navigation.close_drawer();
    }

    /// Drawer entry picked
    pub fn select(&mut self, screen: Screen) {
        self.navigation.select(screen);
    }

    /// Drawer entry picked by its label
    ///
    /// Unknown labels leave the state alone and return false.
    pub fn select_by_title(&mut self, title: &str) -> bool {
        match Screen::from_title(title) {
            Some(screen) => {
                self.select(screen);
                true
            }
            None => {
                tracing::debug!(title, "No screen with this title");
                false
            }
        }
    }

    /// Floating add button pressed
    ///
    /// Returns false when the button is not on screen.
    pub fn press_add_button(&mut self) -> bool {
        if !self.navigation.shows_add_button() {
            return false;
        }
        self.shopping_list.open_add_dialog();
        true
    }

    /// Build the view for the current state
    pub fn view(&self) -> ShellView {
        let selected = self.navigation.selected;
        let content = match StaticScreen::for_screen(selected) {
            Some(placeholder) => ScreenContent::Static(placeholder),
            None => ScreenContent::ShoppingList(self.shopping_list.view()),
        };

        ShellView {
            title: self.navigation.top_bar_title(),
            drawer: DrawerView {
                open: self.navigation.drawer.is_open(),
                header: DRAWER_HEADER,
                items: self.navigation.drawer_items(),
            },
            show_add_button: self.navigation.shows_add_button(),
            content,
        }
    }
}
