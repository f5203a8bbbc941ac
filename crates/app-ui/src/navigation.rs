//! Drawer navigation
//!
//! The app has a flat set of screens reached through a side drawer. Picking a
//! screen from the drawer selects it and closes the drawer; there is no back
//! stack.

use serde::{Deserialize, Serialize};

/// Title shown at the top of the drawer
pub const DRAWER_HEADER: &str = "Main Menu";

// =============================================================================
// Screens
// =============================================================================

/// Screens reachable from the drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Screen {
    /// Home screen
    Home,
    /// Settings screen
    Settings,
    /// Profile screen
    Profile,
    /// Shopping list screen
    #[default]
    ShoppingList,
}

impl Screen {
    /// Title shown in the drawer and the top bar
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Settings => "Settings",
            Screen::Profile => "Profile",
            Screen::ShoppingList => "Shopping List",
        }
    }

    /// Icon name for the drawer entry
    pub fn icon(&self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::Settings => "settings",
            Screen::Profile => "person",
            Screen::ShoppingList => "shopping_cart",
        }
    }

    /// Whether the floating add button belongs on this screen
    pub fn has_add_button(&self) -> bool {
        matches!(self, Screen::ShoppingList)
    }

    /// All screens in drawer order
    pub fn all() -> [Screen; 4] {
        [Screen::Home, Screen::Settings, Screen::Profile, Screen::ShoppingList]
    }

    /// Look up a screen by its title
    pub fn from_title(title: &str) -> Option<Self> {
        Self::all().into_iter().find(|screen| screen.title() == title)
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

// =============================================================================
// Drawer
// =============================================================================

/// Whether the side drawer is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DrawerState {
    /// Drawer hidden
    #[default]
    Closed,
    /// Drawer visible
    Open,
}

impl DrawerState {
    /// Check if the drawer is open
    pub fn is_open(&self) -> bool {
        matches!(self, DrawerState::Open)
    }
}

/// One entry in the drawer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawerItem {
    /// Screen this entry opens
    pub screen: Screen,
    /// Entry label
    pub label: &'static str,
    /// Entry icon name
    pub icon: &'static str,
    /// Whether this is the current screen
    pub selected: bool,
}

// =============================================================================
// Navigation State
// =============================================================================

/// Complete navigation state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NavigationState {
    /// Current screen
    pub selected: Screen,
    /// Drawer visibility
    pub drawer: DrawerState,
}

impl NavigationState {
    /// Create a new navigation state on the shopping list with the drawer closed
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the drawer
    pub fn open_drawer(&mut self) {
        self.drawer = DrawerState::Open;
    }

    /// Close the drawer
    pub fn close_drawer(&mut self) {
        self.drawer = DrawerState::Closed;
    }

    /// Select a screen and close the drawer
    pub fn select(&mut self, screen: Screen) {
        if self.selected != screen {
            tracing::debug!(from = %self.selected, to = %screen, "Switching screen");
        }
        self.selected = screen;
        self.close_drawer();
    }

    /// Title for the top bar
    pub fn top_bar_title(&self) -> &'static str {
        self.selected.title()
    }

    /// Whether the floating add button is shown
    pub fn shows_add_button(&self) -> bool {
        self.selected.has_add_button()
    }

    /// Drawer entries with the current screen marked
    pub fn drawer_items(&self) -> Vec<DrawerItem> {
        Screen::all()
            .into_iter()
            .map(|screen| DrawerItem {
                screen,
                label: screen.title(),
                icon: screen.icon(),
                selected: screen == self.selected,
            })
            .collect()
    }
}
