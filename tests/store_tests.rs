//! Store layout tests beyond the partitioning unit test kept in `store::tests`.

use std::fs;

use position_graph::codec::{Cell, Side};
use position_graph::{Board, Store};

#[test]
fn exists_is_false_until_the_file_is_created() {
    let mut dir = std::env::temp_dir();
    dir.push(format!("position_graph_store_test_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);

    let store = Store::new(&dir);
    let board = Board::from_matrix([[Cell::Void; 8]; 8]);
    let id = board.to_identifier();

    assert!(!store.exists(Side::Light, &id));

    let path = store.path_for(Side::Light, &id);
    store.ensure_parent_dir(&path).expect("create parent dirs");
    fs::write(&path, b"").expect("create file");

    assert!(store.exists(Side::Light, &id));
    assert!(!store.exists(Side::Dark, &id), "partitions for each side are independent");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn light_and_dark_partitions_never_collide() {
    let mut dir = std::env::temp_dir();
    dir.push(format!("position_graph_store_partitions_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);

    let store = Store::new(&dir);
    let board = Board::from_matrix([[Cell::Void; 8]; 8]);
    let id = board.to_identifier();

    assert_ne!(store.path_for(Side::Light, &id), store.path_for(Side::Dark, &id));

    let _ = fs::remove_dir_all(&dir);
}
