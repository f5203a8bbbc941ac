//! Shopping flow integration tests
//!
//! End-to-end tests driving the app shell the way a user would, plus the
//! reference scenarios for the store.

use shopping_list_app::app_state::{ShoppingListError, ShoppingListEvent};
use shopping_list_app::app_ui::{DraftError, ItemRow, ScreenContent};
use shopping_list_app::{
    start_session, IdStrategy, ItemId, Screen, ShoppingItem, ShoppingListStore, StoreConfig,
};

fn id(raw: u64) -> ItemId {
    ItemId::new(raw)
}

fn list_rows(shell: &shopping_list_app::AppShell) -> Vec<ItemRow> {
    match shell.view().content {
        ScreenContent::ShoppingList(list) => list.rows,
        other => panic!("Expected shopping list, got {:?}", other),
    }
}

/// Scenarios A through D on a store using legacy id numbering
#[test]
fn test_reference_scenarios() {
    let store = ShoppingListStore::with_config(
        StoreConfig::new().id_strategy(IdStrategy::CollectionSize),
    )
    .unwrap();

    // A
    store.add("Milk", 2);
    assert_eq!(store.list().items(), &[ShoppingItem::new(id(1), "Milk", 2)]);

    // B
    store.add("Eggs", 12);
    let snapshot = store.begin_edit(id(2)).unwrap();
    assert_eq!(snapshot.items()[0], ShoppingItem::new(id(1), "Milk", 2));
    assert!(snapshot.items()[1].is_editing);

    // C
    let snapshot = store.commit_edit(id(2), "Eggs", 6).unwrap();
    assert_eq!(snapshot.items()[1], ShoppingItem::new(id(2), "Eggs", 6));

    // D
    store.add("Cheese", 1);
    let snapshot = store.delete(id(2)).unwrap();
    assert_eq!(snapshot.ids(), vec![id(1), id(3)]);

    let bread = store.add("Bread", 1);
    assert_eq!(bread.id, id(3));
    assert_eq!(store.list().ids(), vec![id(1), id(3), id(3)]);
}

/// The default numbering does not repeat Scenario D's collision
#[test]
fn test_default_ids_survive_deletes() {
    let store = ShoppingListStore::new();
    store.add("Milk", 2);
    store.add("Eggs", 12);
    store.add("Cheese", 1);
    store.delete(id(2)).unwrap();

    let bread = store.add("Bread", 1);
    assert_eq!(bread.id, id(4));
    assert_eq!(store.list().ids(), vec![id(1), id(3), id(4)]);
}

/// A full user session through the shell
#[test]
fn test_complete_user_session() {
    let _ = shopping_list_app::init_tracing();
    let mut shell = start_session(StoreConfig::default()).unwrap();

    // Add two items through the dialog
    assert!(shell.press_add_button());
    shell.shopping_list_mut().set_draft_name("Milk");
    shell.shopping_list_mut().set_draft_quantity("2");
    shell.shopping_list_mut().confirm_add().unwrap();

    assert!(shell.press_add_button());
    shell.shopping_list_mut().set_draft_name("Eggs");
    shell.shopping_list_mut().set_draft_quantity("twelve");
    shell.shopping_list_mut().confirm_add().unwrap();

    // Fix the quantity inline
    shell.shopping_list_mut().begin_edit(id(2)).unwrap();
    shell.shopping_list_mut().set_edit_quantity(id(2), "12").unwrap();
    shell.shopping_list_mut().complete_edit(id(2)).unwrap();

    // Visit another screen and come back
    shell.open_drawer();
    shell.select(Screen::Home);
    assert_eq!(shell.view().title, "Home");
    assert!(!shell.press_add_button());

    shell.open_drawer();
    shell.select(Screen::ShoppingList);

    assert_eq!(
        list_rows(&shell),
        vec![
            ItemRow::Display {
                id: id(1),
                name: "Milk".to_string(),
                quantity_label: "Quantity : 2".to_string(),
            },
            ItemRow::Display {
                id: id(2),
                name: "Eggs".to_string(),
                quantity_label: "Quantity : 12".to_string(),
            },
        ]
    );

    // Remove the milk
    shell.shopping_list_mut().delete(id(1)).unwrap();
    let rows = list_rows(&shell);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id(), id(2));
}

/// Abandoned edits leave the item untouched
#[test]
fn test_cancelled_edit() {
    let mut shell = start_session(StoreConfig::default()).unwrap();
    shell.press_add_button();
    shell.shopping_list_mut().set_draft_name("Butter");
    shell.shopping_list_mut().confirm_add().unwrap();

    shell.shopping_list_mut().begin_edit(id(1)).unwrap();
    shell.shopping_list_mut().set_edit_name(id(1), "Margarine").unwrap();
    shell.shopping_list_mut().cancel_edit(id(1)).unwrap();

    let store = shell.shopping_list().store();
    assert_eq!(store.get(id(1)), Some(ShoppingItem::new(id(1), "Butter", 1)));
    assert!(store.editing_item().is_none());
}

/// Gestures aimed at missing items are rejected without side effects
#[test]
fn test_missing_items_are_harmless() {
    let mut shell = start_session(StoreConfig::default()).unwrap();
    let before = shell.shopping_list().store().list();

    assert_eq!(
        shell.shopping_list_mut().begin_edit(id(5)),
        Err(DraftError::Store(ShoppingListError::NotFound(id(5))))
    );
    assert!(shell.shopping_list_mut().delete(id(5)).is_err());

    assert_eq!(shell.shopping_list().store().list(), before);
}

/// Renderers observe the store through its channels
#[tokio::test]
async fn test_renderer_follows_store() {
    let mut shell = start_session(StoreConfig::default()).unwrap();
    let mut snapshots = shell.shopping_list().store().subscribe();
    let mut events = shell.shopping_list().store().subscribe_events();

    shell.press_add_button();
    shell.shopping_list_mut().set_draft_name("Tea");
    let tea = shell.shopping_list_mut().confirm_add().unwrap();

    snapshots.changed().await.unwrap();
    assert_eq!(snapshots.borrow().items(), &[tea.clone()]);
    assert_eq!(events.recv().await.unwrap(), ShoppingListEvent::ItemAdded(tea));
}

/// Configuration loaded from JSON drives the store
#[test]
fn test_config_from_json() {
    let config = StoreConfig::from_json(r#"{"idStrategy":"collectionSize","eventCapacity":8}"#)
        .unwrap();
    let shell = start_session(config).unwrap();

    let store = shell.shopping_list().store();
    assert_eq!(store.config().id_strategy, IdStrategy::CollectionSize);

    let json = serde_json::to_value(store.add("Rice", 1)).unwrap();
    assert_eq!(json["isEditing"], false);
}
