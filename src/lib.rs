//! Shopping list app
//!
//! Umbrella crate re-exporting the workspace crates and providing session
//! setup for hosts that embed the app.
//!
//! # Example
//!
//! ```rust
//! use shopping_list_app::{start_session, StoreConfig};
//!
//! let _ = shopping_list_app::init_tracing();
//! let mut shell = start_session(StoreConfig::default()).unwrap();
//! assert!(shell.press_add_button());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use app_core::{self, ItemId, ShoppingItem};
pub use app_state::{self, IdStrategy, ShoppingListStore, StoreConfig};
pub use app_ui::{self, AppShell, Screen};

use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install a global `fmt` subscriber filtered by `RUST_LOG`
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).try_init()
}

/// Start a session with an empty shopping list
pub fn start_session(config: StoreConfig) -> app_state::config::Result<AppShell> {
    let shell = AppShell::from_config(config)?;
    tracing::info!(
        id_strategy = ?shell.shopping_list().store().config().id_strategy,
        "Shopping list session started"
    );
    Ok(shell)
}
