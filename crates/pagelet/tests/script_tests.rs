//! End-to-end tests: the whole script against a seeded page

use pagelet::{apply_page_changes, demo_page, run};
use pagelet_dom::{DomTree, Queryable};
use pagelet_host::{HostError, Page, RecordingConsole, RecordingModal};

#[test]
fn script_emits_expected_transcript() {
    let mut page = demo_page();
    let mut console = RecordingConsole::new();

    run(&mut page, &mut console).unwrap();

    assert_eq!(
        console.lines(),
        [
            "Terry is an adult.",
            "Hello, Terry! Welcome to the site.",
            "Sum of 5 and 10: 15",
            "For loop iteration: 0",
            "For loop iteration: 1",
            "For loop iteration: 2",
            "For loop iteration: 3",
            "For loop iteration: 4",
            "While loop iteration: 0",
            "While loop iteration: 1",
            "While loop iteration: 2",
        ]
    );
}

#[test]
fn script_mutates_the_page() {
    let mut page = demo_page();
    let mut console = RecordingConsole::new();

    let example3 = page.find("dom-example-3").unwrap();
    let children_before = page.tree().children(example3).len();

    run(&mut page, &mut console).unwrap();

    let example1 = page.find("dom-example-1").unwrap();
    assert_eq!(page.text_of(example1), "DOM content changed!");

    let example2 = page.find("dom-example-2").unwrap();
    assert_eq!(page.style_of(example2, "color"), Some("blue".to_string()));

    // Exactly one new child, a <p> carrying the fixed text
    let children = page.tree().children(example3);
    assert_eq!(children.len(), children_before + 1);
    let added = *children.last().unwrap();
    let node = page.tree().get(added).unwrap();
    assert_eq!(node.tag_name(), Some("p"));
    assert_eq!(page.text_of(added), "This is dynamically added via JS.");
}

#[test]
fn click_shows_the_alert() {
    let mut page = demo_page();
    let mut console = RecordingConsole::new();
    run(&mut page, &mut console).unwrap();

    let button = page.find("actionBtn").unwrap();
    let mut modal = RecordingModal::new();

    assert_eq!(page.click(button, &mut modal), 1);
    assert_eq!(modal.alerts(), ["Button clicked!"]);
}

#[test]
fn handler_fires_once_per_click() {
    let mut page = demo_page();
    let mut console = RecordingConsole::new();
    run(&mut page, &mut console).unwrap();

    let button = page.find("actionBtn").unwrap();
    let mut modal = RecordingModal::new();
    page.click(button, &mut modal);
    page.click(button, &mut modal);

    assert_eq!(modal.alerts(), ["Button clicked!", "Button clicked!"]);
}

#[test]
fn click_before_script_runs_does_nothing() {
    let mut page = demo_page();
    let button = page.find("actionBtn").unwrap();
    let mut modal = RecordingModal::new();

    assert_eq!(page.click(button, &mut modal), 0);
    assert!(modal.alerts().is_empty());
}

#[test]
fn missing_node_aborts_the_mutation_block() {
    // A page without "dom-example-2": the first mutation lands, the rest
    // never run.
    let mut tree = DomTree::new();
    let body = tree.create_element("body");
    tree.append_child(tree.document_id(), body).unwrap();
    for (id, tag) in [
        ("dom-example-1", "div"),
        ("actionBtn", "button"),
        ("dom-example-3", "div"),
    ] {
        let node = tree.create_element(tag);
        tree.get_mut(node)
            .unwrap()
            .as_element_mut()
            .unwrap()
            .set_attribute("id", id);
        tree.append_child(body, node).unwrap();
    }
    let mut page = Page::new(tree);

    let err = apply_page_changes(&mut page).unwrap_err();
    match err {
        HostError::ElementNotFound(id) => assert_eq!(id, "dom-example-2"),
        other => panic!("unexpected error: {}", other),
    }

    // First mutation already happened
    let example1 = page.find("dom-example-1").unwrap();
    assert_eq!(page.text_of(example1), "DOM content changed!");

    // The later statements never ran
    let example3 = page.find("dom-example-3").unwrap();
    assert!(page.tree().children(example3).is_empty());
    let button = page.find("actionBtn").unwrap();
    let mut modal = RecordingModal::new();
    assert_eq!(page.click(button, &mut modal), 0);
}

#[test]
fn added_paragraph_is_queryable_by_tag() {
    let mut page = demo_page();
    let mut console = RecordingConsole::new();
    run(&mut page, &mut console).unwrap();

    let paragraphs = page.tree().elements_by_tag_name("p");
    assert_eq!(paragraphs.len(), 1);
}
