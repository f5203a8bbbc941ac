//! Shopping list screen
//!
//! [`ShoppingListScreen`] sits between the rendering layer and the
//! [`ShoppingListStore`]. It owns the text typed into the "add item" dialog and
//! into the inline edit form. Drafts only reach the store when the user
//! confirms them; quantity text that is not a whole number becomes
//! [`DEFAULT_QUANTITY`].

use app_core::{parse_quantity_or_default, ItemId, ShoppingItem, DEFAULT_QUANTITY};
use app_state::{ShoppingListError, ShoppingListSnapshot, ShoppingListStore};
use serde::Serialize;

/// Title of the add item dialog
pub const ADD_DIALOG_TITLE: &str = "Add New Item";

/// Placeholder shown in an untouched quantity field
pub const QUANTITY_PLACEHOLDER: &str = "Enter quantity";

/// Errors from confirming drafts
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    /// The new item has no name
    #[error("Item name is empty")]
    EmptyName,

    /// Confirm pressed while the add dialog is closed
    #[error("Add item dialog is not open")]
    DialogClosed,

    /// The item is not being edited
    #[error("No edit in progress for item {0}")]
    NoEditInProgress(ItemId),

    /// The store rejected the operation
    #[error(transparent)]
    Store(#[from] ShoppingListError),
}

/// Result type for shopping list screen operations
pub type Result<T> = std::result::Result<T, DraftError>;

// =============================================================================
// Drafts
// =============================================================================

/// Values typed into the add item dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddItemDraft {
    /// Typed name
    pub name: String,
    /// Parsed quantity
    pub quantity: u32,
    /// Whether the user has typed into the quantity field yet
    pub quantity_touched: bool,
}

impl Default for AddItemDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: DEFAULT_QUANTITY,
            quantity_touched: false,
        }
    }
}

impl AddItemDraft {
    /// Text shown in the quantity field
    ///
    /// Empty until the field is touched so the placeholder shows.
    pub fn quantity_text(&self) -> String {
        if self.quantity_touched {
            self.quantity.to_string()
        } else {
            String::new()
        }
    }
}

/// Values typed into an item's inline edit form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    /// Item being edited
    pub id: ItemId,
    /// Typed name
    pub name: String,
    /// Raw quantity text
    pub quantity_text: String,
}

impl EditDraft {
    /// Seed a draft with an item's current values
    pub fn from_item(item: &ShoppingItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            quantity_text: item.quantity.to_string(),
        }
    }

    /// Quantity to commit
    pub fn quantity(&self) -> u32 {
        parse_quantity_or_default(&self.quantity_text)
    }
}

// =============================================================================
// View Models
// =============================================================================

/// One row of the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum ItemRow {
    /// Read-only row with edit and delete buttons
    #[serde(rename_all = "camelCase")]
    Display {
        /// Item id
        id: ItemId,
        /// Item name
        name: String,
        /// "Quantity : N"
        quantity_label: String,
    },
    /// Inline edit form with an update button
    Editing {
        /// Item id
        id: ItemId,
        /// Name field text
        name: String,
        /// Quantity field text
        quantity: String,
    },
}

impl ItemRow {
    /// Id of the item in this row
    pub fn id(&self) -> ItemId {
        match self {
            ItemRow::Display { id, .. } | ItemRow::Editing { id, .. } => *id,
        }
    }

    /// Check if this row shows the edit form
    pub fn is_editing(&self) -> bool {
        matches!(self, ItemRow::Editing { .. })
    }
}

/// The add item dialog as shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemDialogView {
    /// Dialog title
    pub title: &'static str,
    /// Name field text
    pub name: String,
    /// Quantity field text
    pub quantity: String,
    /// Quantity field placeholder
    pub quantity_placeholder: &'static str,
}

/// Everything the shopping list screen renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListView {
    /// Rows in list order
    pub rows: Vec<ItemRow>,
    /// The add dialog, when open
    pub add_dialog: Option<AddItemDialogView>,
}

// =============================================================================
// Screen
// =============================================================================

/// Presentation state of the shopping list screen
#[derive(Debug, Clone)]
pub struct ShoppingListScreen {
    store: ShoppingListStore,
    draft: AddItemDraft,
    dialog_open: bool,
    edit: Option<EditDraft>,
}

impl ShoppingListScreen {
    /// Create the screen on top of a store
    pub fn new(store: ShoppingListStore) -> Self {
        Self {
            store,
            draft: AddItemDraft::default(),
            dialog_open: false,
            edit: None,
        }
    }

    /// The underlying store
    pub fn store(&self) -> &ShoppingListStore {
        &self.store
    }

    // -- Add dialog -----------------------------------------------------------

    /// Show the add item dialog
    pub fn open_add_dialog(&mut self) {
        self.dialog_open = true;
    }

    /// Check if the add item dialog is showing
    pub fn is_add_dialog_open(&self) -> bool {
        self.dialog_open
    }

    /// Current add dialog draft
    pub fn draft(&self) -> &AddItemDraft {
        &self.draft
    }

    /// Update the typed name
    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    /// Update the typed quantity
    pub fn set_draft_quantity(&mut self, text: &str) {
        self.draft.quantity_touched = true;
        self.draft.quantity = parse_quantity_or_default(text);
    }

    /// Close the dialog without adding
    ///
    /// The typed name and quantity are kept for the next time the dialog
    /// opens; the quantity field goes back to showing its placeholder.
    pub fn dismiss_add_dialog(&mut self) {
        self.dialog_open = false;
        self.draft.quantity_touched = false;
    }

    /// Add the drafted item and close the dialog
    pub fn confirm_add(&mut self) -> Result<ShoppingItem> {
        if !self.dialog_open {
            return Err(DraftError::DialogClosed);
        }
        if self.draft.name.trim().is_empty() {
            tracing::warn!("Refusing to add shopping item without a name");
            return Err(DraftError::EmptyName);
        }

        let draft = std::mem::take(&mut self.draft);
        let item = self.store.add(draft.name, draft.quantity);
        self.dialog_open = false;

        Ok(item)
    }

    // -- Inline edit ----------------------------------------------------------

    /// Current edit draft, if an item is being edited
    pub fn edit_draft(&self) -> Option<&EditDraft> {
        self.edit.as_ref()
    }

    /// Open the inline edit form for an item
    ///
    /// Any other edit in progress is discarded.
    pub fn begin_edit(&mut self, id: ItemId) -> Result<()> {
        let snapshot = self.store.begin_edit(id)?;
        self.edit = snapshot.editing_item().map(EditDraft::from_item);
        Ok(())
    }

    /// Update the name typed into the edit form
    pub fn set_edit_name(&mut self, id: ItemId, name: impl Into<String>) -> Result<()> {
        self.edit_mut(id)?.name = name.into();
        Ok(())
    }

    /// Update the quantity typed into the edit form
    pub fn set_edit_quantity(&mut self, id: ItemId, text: impl Into<String>) -> Result<()> {
        self.edit_mut(id)?.quantity_text = text.into();
        Ok(())
    }

    /// Commit the edit form
    ///
    /// The draft is kept if the store rejects the commit.
    pub fn complete_edit(&mut self, id: ItemId) -> Result<ShoppingListSnapshot> {
        let draft = self.pending_edit(id)?;
        let quantity = draft.quantity();
        tracing::debug!(item_id = %id, quantity, "Completing edit");

        let snapshot = self.store.commit_edit(id, draft.name, quantity)?;
        self.edit = None;
        Ok(snapshot)
    }

    /// Close the edit form without saving
    ///
    /// The store leaves edit mode on every item, so any draft is dropped.
    pub fn cancel_edit(&mut self, id: ItemId) -> Result<ShoppingListSnapshot> {
        let snapshot = self.store.cancel_edit(id)?;
        self.edit = None;
        Ok(snapshot)
    }

    /// Delete an item
    pub fn delete(&mut self, id: ItemId) -> Result<ShoppingListSnapshot> {
        let snapshot = self.store.delete(id)?;
        if self.edit.as_ref().is_some_and(|draft| draft.id == id) {
            self.edit = None;
        }
        Ok(snapshot)
    }

    fn edit_mut(&mut self, id: ItemId) -> Result<&mut EditDraft> {
        match self.edit.as_mut() {
            Some(draft) if draft.id == id => Ok(draft),
            _ => Err(DraftError::NoEditInProgress(id)),
        }
    }

    fn pending_edit(&self, id: ItemId) -> Result<EditDraft> {
        let item = self
            .store
            .get(id)
            .ok_or(DraftError::Store(ShoppingListError::NotFound(id)))?;
        if !item.is_editing {
            return Err(DraftError::NoEditInProgress(id));
        }

        match &self.edit {
            Some(draft) if draft.id == id => Ok(draft.clone()),
            // Edit mode entered through another handle on the store
            _ => Ok(EditDraft::from_item(&item)),
        }
    }

    // -- Rendering ------------------------------------------------------------

    /// Build the view from the current snapshot and drafts
    pub fn view(&self) -> ShoppingListView {
        let snapshot = self.store.list();

        let rows = snapshot
            .items()
            .iter()
            .map(|item| {
                if item.is_editing {
                    let draft = match &self.edit {
                        Some(draft) if draft.id == item.id => draft.clone(),
                        _ => EditDraft::from_item(item),
                    };
                    ItemRow::Editing {
                        id: item.id,
                        name: draft.name,
                        quantity: draft.quantity_text,
                    }
                } else {
                    ItemRow::Display {
                        id: item.id,
                        name: item.name.clone(),
                        quantity_label: item.quantity_label(),
                    }
                }
            })
            .collect();

        let add_dialog = self.dialog_open.then(|| AddItemDialogView {
            title: ADD_DIALOG_TITLE,
            name: self.draft.name.clone(),
            quantity: self.draft.quantity_text(),
            quantity_placeholder: QUANTITY_PLACEHOLDER,
        });

        ShoppingListView { rows, add_dialog }
    }
}

impl Default for ShoppingListScreen {
    fn default() -> Self {
        Self::new(ShoppingListStore::new())
    }
}
