//! End-to-end behavior of the explorer model: tree, selection, flattening,
//! virtual windowing and per-view state working together.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use webdesk_core::{
    flat_ids, seed_directory, EntryId, EntryKind, Error, FileSystem, FsViewModel, KeyInput,
    PointerInput, RangeError, Selection, StateError, ValidationError, Viewport, Virtualizer,
};

fn dir(fs: &mut FileSystem, parent: EntryId, name: &str) -> EntryId {
    let id = fs.create_directory(name);
    fs.add(parent, id).unwrap()
}

fn file(fs: &mut FileSystem, parent: EntryId, name: &str) -> EntryId {
    let id = fs.create_file(name);
    fs.add(parent, id).unwrap()
}

fn names(fs: &FileSystem, ids: &[EntryId]) -> Vec<String> {
    ids.iter().map(|&id| fs.name(id).to_string()).collect()
}

#[test]
fn test_children_sorted_on_every_read() {
    let mut fs = FileSystem::default();
    let root = fs.root();
    for name in ["zeta", "Alpha", "beta", "Éclair", "delta"] {
        file(&mut fs, root, name);
    }

    let first = fs.children(root);
    assert_eq!(
        names(&fs, &first),
        ["Alpha", "beta", "delta", "Éclair", "zeta"]
    );
    assert_eq!(fs.children(root), first);

    let mid = file(&mut fs, root, "charlie");
    let second = fs.children(root);
    assert_eq!(second[2], mid);
}

#[test]
fn test_cascade_delete() {
    let mut fs = FileSystem::default();
    let root = fs.root();
    let a = dir(&mut fs, root, "a");
    let b = dir(&mut fs, a, "b");
    let c = file(&mut fs, b, "c");

    assert_eq!(fs.remove(root, &HashSet::from([a])), 1);

    assert!(fs.is_deleted(a));
    assert!(fs.is_deleted(b));
    assert!(fs.is_deleted(c));
    assert!(!fs.children(root).contains(&a));
}

#[test]
fn test_add_after_delete_rejected() {
    let mut fs = FileSystem::default();
    let root = fs.root();
    let d = dir(&mut fs, root, "d");
    fs.delete(d);

    let x = fs.create_file("x");
    assert!(matches!(fs.add(d, x), Err(StateError::Deleted { .. })));
    assert!(fs.children(d).is_empty());
}

#[test]
fn test_add_under_deleted_ancestor_rejected() {
    let mut fs = FileSystem::default();
    let root = fs.root();
    let a = dir(&mut fs, root, "a");
    let b = dir(&mut fs, a, "b");
    fs.remove(root, &HashSet::from([a]));

    let x = fs.create_file("x");
    assert!(matches!(fs.add(b, x), Err(StateError::Deleted { .. })));
    assert!(fs.children(b).is_empty());

    let view = FsViewModel::new(&fs, b);
    let result = view.create_in_cwd(&mut fs, EntryKind::Directory, "y");
    assert!(matches!(result, Err(Error::State(_))));
}

#[test]
fn test_range_selection_is_direction_agnostic() {
    let source: Vec<u32> = (0..8).collect();

    let mut forward = Selection::new(source.clone());
    forward.select_range(&source, 2, 5, true).unwrap();
    let mut backward = Selection::new(source.clone());
    backward.select_range(&source, 5, 2, true).unwrap();

    assert_eq!(forward.items(), backward.items());
    assert_eq!(forward.items(), &HashSet::from([2, 3, 4, 5]));
}

#[test]
fn test_range_clamps_end_and_rejects_negative() {
    let source = vec!['a', 'b', 'c', 'd', 'e'];
    let mut selection = Selection::new(source.clone());

    selection.select_range(&source, 0, 10_000, true).unwrap();
    assert_eq!(selection.len(), 5);

    assert_eq!(
        selection.select_range(&source, -1, 3, true),
        Err(RangeError::NegativeStart(-1))
    );
}

#[test]
fn test_click_intents() {
    let source = vec!["x", "y", "z"];

    let mut selection = Selection::new(source.clone());
    selection.select_one("x");
    selection
        .from_click_event(&source, "z", &PointerInput::primary().with_shift())
        .unwrap();
    assert_eq!(selection.items(), &HashSet::from(["x", "y", "z"]));

    let mut selection = Selection::new(source.clone());
    selection.select_one("x");
    selection
        .from_click_event(&source, "y", &PointerInput::primary().with_ctrl())
        .unwrap();
    assert_eq!(selection.items(), &HashSet::from(["x", "y"]));

    let mut selection = Selection::new(source.clone());
    selection.select_one("x");
    selection
        .from_click_event(&source, "y", &PointerInput::primary())
        .unwrap();
    assert_eq!(selection.items(), &HashSet::from(["y"]));
}

#[test]
fn test_virtual_window_over_flattened_tree() {
    let mut fs = FileSystem::default();
    let root = fs.root();
    for i in 0..1000 {
        file(&mut fs, root, &format!("row {i:04}"));
    }
    let view = FsViewModel::new(&fs, root);
    let flat = view.flattened(&fs);
    assert_eq!(flat.len(), 1000);

    let mut virtualizer = Virtualizer::new(20.0);
    virtualizer.set_viewport(Viewport::new(400.0, 200.0));
    virtualizer.set_scroll_top(4000.0);
    let window = virtualizer.window(flat.len()).unwrap();

    assert!(window.start <= 190 && window.end >= 210);
    assert!(window.end <= 1000);
    assert_eq!(fs.name(flat[window.start].item), "row 0190");
}

#[test]
fn test_flatten_follows_expansion() {
    let mut fs = FileSystem::default();
    let root = fs.root();
    file(&mut fs, root, "fileB");
    let dir_a = dir(&mut fs, root, "dirA");
    file(&mut fs, dir_a, "f2");
    file(&mut fs, dir_a, "f1");

    let mut view = FsViewModel::new(&fs, root);
    view.toggle_expanded(dir_a, Some(true));
    let flat = view.flattened(&fs);
    let rows: Vec<(String, usize)> = flat
        .iter()
        .map(|f| (fs.name(f.item).to_string(), f.depth))
        .collect();
    assert_eq!(
        rows,
        [
            ("dirA".into(), 0),
            ("f1".into(), 1),
            ("f2".into(), 1),
            ("fileB".into(), 0)
        ]
    );

    view.toggle_expanded(dir_a, None);
    assert_eq!(names(&fs, &flat_ids(&view.flattened(&fs))), ["dirA", "fileB"]);
}

#[test]
fn test_switching_cwd_clears_selection() {
    let mut fs = FileSystem::default();
    let root = fs.root();
    seed_directory(&mut fs, root, 0, &mut StdRng::seed_from_u64(3)).unwrap();

    let mut view = FsViewModel::new(&fs, root);
    let children = view.children(&fs);
    view.handle_click(&children, children[0], &PointerInput::primary())
        .unwrap();
    view.handle_click(&children, children[1], &PointerInput::primary().with_ctrl())
        .unwrap();
    assert_eq!(view.selection().len(), 2);

    assert!(view.open(&fs, children[1]));
    assert_eq!(view.selection().len(), 0);
}

#[test]
fn test_name_reusable_after_delete() {
    let mut fs = FileSystem::default();
    let root = fs.root();
    let mut view = FsViewModel::new(&fs, root);

    view.create_in_cwd(&mut fs, EntryKind::File, "notes.txt")
        .unwrap();
    assert!(!view.is_name_available(&fs, "notes.txt"));
    assert_eq!(
        view.create_in_cwd(&mut fs, EntryKind::File, "notes.txt"),
        Err(Error::Validation(ValidationError::NameUnavailable(
            "notes.txt".into()
        )))
    );

    let children = view.children(&fs);
    view.handle_key(&mut fs, &children, &KeyInput::new("a").with_ctrl());
    view.handle_key(&mut fs, &children, &KeyInput::new("Backspace"));

    assert!(view.is_name_available(&fs, "notes.txt"));
    assert!(view.create_in_cwd(&mut fs, EntryKind::File, "notes.txt").is_ok());
}

#[test]
fn test_two_views_share_tree_but_not_selection() {
    let mut fs = FileSystem::default();
    let root = fs.root();
    seed_directory(&mut fs, root, 10, &mut StdRng::seed_from_u64(9)).unwrap();

    let mut left = FsViewModel::new(&fs, root);
    let right = FsViewModel::new(&fs, root);
    let children = left.children(&fs);
    left.handle_click(&children, children[0], &PointerInput::primary())
        .unwrap();

    assert!(left.selected(children[0]));
    assert!(!right.selected(children[0]));

    left.delete_selection(&mut fs);
    assert!(!right.children(&fs).contains(&children[0]));
}
