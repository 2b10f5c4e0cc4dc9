use donut_widgets::api::{CheckBoxList, CheckBoxRow};
use donut_widgets::selection::{ItemAccessors, SelectionSource, SourceKind};
use indexmap::IndexMap;

fn row(key: &str, label: &str, checked: bool) -> CheckBoxRow {
    CheckBoxRow {
        key: key.to_owned(),
        label: label.to_owned(),
        checked,
    }
}

#[test]
fn string_list_seeds_on_first_render_only() {
    let mut list = CheckBoxList::strings(["A", "B", "C"]).with_unchecked_initially(["B"]);
    assert!(list.state().selected_keys().is_empty());

    assert!(list.after_first_render().expect("first render"));
    assert_eq!(list.state().selected_keys(), ["A", "C"]);

    list.toggle_item(0, false).expect("toggle");
    assert!(!list.after_first_render().expect("second render"));
    assert_eq!(list.state().selected_keys(), ["C"]);
}

#[test]
fn rows_reflect_selection_in_source_order() {
    let mut list = CheckBoxList::strings(["A", "B", "C"]).with_unchecked_initially(["b"]);
    list.after_first_render().expect("first render");
    list.toggle_item(1, true).expect("toggle");
    list.toggle_item(0, false).expect("toggle");

    let rows = list.rows().expect("rows");
    assert_eq!(
        rows,
        vec![row("A", "A", false), row("B", "B", true), row("C", "C", true)]
    );
    assert_eq!(list.state().selected_keys(), ["C", "B"]);
}

#[test]
fn toggling_out_of_range_index_is_ignored() {
    let mut list = CheckBoxList::strings(["A"]);
    assert!(!list.toggle_item(5, true).expect("toggle"));
    assert!(list.state().selected_keys().is_empty());
}

#[test]
fn key_value_list_maps_selected_keys_to_source_values() {
    let data: IndexMap<String, i64> = [
        ("Completed".to_owned(), 30),
        ("In Progress".to_owned(), 15),
        ("Blocked".to_owned(), 5),
    ]
    .into_iter()
    .collect();
    let mut list = CheckBoxList::key_values(data).with_unchecked_initially(["Blocked"]);
    assert_eq!(list.state().kind(), SourceKind::KeyValues);

    list.after_first_render().expect("first render");

    let map = list.state().selected_map();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("Completed"), Some(&30));
    assert_eq!(map.get("In Progress"), Some(&15));
    assert_eq!(map.get("Blocked"), None);
}

#[test]
fn replacing_key_values_keeps_rows_and_map_in_step() {
    let data: IndexMap<String, i64> = [("Completed".to_owned(), 30), ("Blocked".to_owned(), 5)]
        .into_iter()
        .collect();
    let mut list = CheckBoxList::key_values(data);
    list.after_first_render().expect("first render");

    let updated: IndexMap<String, i64> = [("Completed".to_owned(), 42), ("Queued".to_owned(), 7)]
        .into_iter()
        .collect();
    assert!(list.set_key_values(updated));

    assert_eq!(
        list.rows().expect("rows"),
        [row("Completed", "Completed", true), row("Queued", "Queued", false)]
    );
    let map = list.state().selected_map();
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("Completed"), Some(&42));
    assert!(list.state().is_selected("Blocked"));
}

#[test]
fn replacing_key_values_on_string_list_is_refused() {
    let mut list = CheckBoxList::with_source(
        vec![("A".to_owned(), 1)],
        ItemAccessors::infallible(
            |item: &(String, i64)| item.0.clone(),
            |item: &(String, i64)| item.0.clone(),
        ),
        SelectionSource::Strings,
    );

    assert!(!list.set_key_values(IndexMap::new()));
    assert_eq!(list.items().len(), 1);
}

#[derive(Debug, Clone)]
struct Region {
    code: &'static str,
    title: &'static str,
}

#[test]
fn object_list_uses_accessors_and_positional_map() {
    let regions = vec![
        Region {
            code: "n",
            title: "North",
        },
        Region {
            code: "s",
            title: "South",
        },
        Region {
            code: "e",
            title: "East",
        },
    ];
    let accessors = ItemAccessors::infallible(
        |r: &Region| r.code.to_owned(),
        |r: &Region| r.title.to_owned(),
    );
    let mut list = CheckBoxList::objects(regions, accessors).with_unchecked_initially(["NORTH"]);
    list.after_first_render().expect("first render");

    assert_eq!(list.state().selected_keys(), ["s", "e"]);
    assert_eq!(list.state().selected_labels(), ["South", "East"]);
    assert_eq!(list.state().selected_map().get("s"), Some(&0));
    assert_eq!(list.state().selected_map().get("e"), Some(&1));

    list.toggle_item(0, true).expect("toggle");
    assert_eq!(list.state().selected_map().get("n"), Some(&2));
    assert_eq!(list.items().len(), 3);
}

#[test]
fn host_selected_values_survive_first_render() {
    let mut list = CheckBoxList::strings(["A", "B"])
        .with_unchecked_initially(["A", "B"])
        .with_selected(["A"], ["A"]);
    list.after_first_render().expect("first render");

    assert_eq!(list.state().selected_keys(), ["A"]);
    assert_eq!(list.state().selected_map().get("A"), Some(&0));
}
