//! Pagelet - a scripted page demo
//!
//! A small script that runs once, top to bottom, against a host page:
//! a conditional greeting, two named functions, two bounded loops, and a
//! block of document mutations. The host side (tree, console, modal,
//! click dispatch) lives in `pagelet-host`; this crate is the consumer.

use pagelet_dom::{DomTree, NodeId};
use pagelet_host::{Console, HostError, HostResult, Page};

/// Age threshold for the adult branch
const ADULT_AGE: u32 = 18;

/// Emit the adult or non-adult line for a name and age
pub fn describe_age(console: &mut dyn Console, name: &str, age: u32) {
    if age >= ADULT_AGE {
        console.log(&format!("{} is an adult.", name));
    } else {
        console.log(&format!("{} is not an adult.", name));
    }
}

/// Emit a welcome line for a user
pub fn greet(console: &mut dyn Console, user_name: &str) {
    console.log(&format!("Hello, {}! Welcome to the site.", user_name));
}

/// Arithmetic sum of two numbers
pub fn sum(a: i64, b: i64) -> i64 {
    a + b
}

/// Counted loop: one line per index, 0 through 4
pub fn count_for(console: &mut dyn Console) {
    for i in 0..5 {
        console.log(&format!("For loop iteration: {}", i));
    }
}

/// Condition-checked loop: one line per value until the counter reaches 3
///
/// Returns the final counter value.
pub fn count_while(console: &mut dyn Console) -> u32 {
    let mut count = 0;
    while count < 3 {
        console.log(&format!("While loop iteration: {}", count));
        count += 1;
    }
    count
}

fn lookup(page: &Page, id: &str) -> HostResult<NodeId> {
    page.find(id)
        .ok_or_else(|| HostError::ElementNotFound(id.to_string()))
}

/// The document-mutation block
///
/// Looks up the four named nodes and mutates them in order. A missing
/// node aborts the remaining mutations; anything already applied stays
/// applied.
pub fn apply_page_changes(page: &mut Page) -> HostResult<()> {
    let example1 = lookup(page, "dom-example-1")?;
    page.set_text(example1, "DOM content changed!")?;

    let example2 = lookup(page, "dom-example-2")?;
    page.set_style(example2, "color", "blue")?;

    let action_btn = lookup(page, "actionBtn")?;
    page.on_click(action_btn, Box::new(|modal| modal.alert("Button clicked!")));

    let example3 = lookup(page, "dom-example-3")?;
    let new_paragraph = page.create_element("p");
    page.set_text(new_paragraph, "This is dynamically added via JS.")?;
    page.append_child(example3, new_paragraph)?;

    Ok(())
}

/// Run the whole script once, top to bottom
pub fn run(page: &mut Page, console: &mut dyn Console) -> HostResult<()> {
    let name = "Terry";
    let age = 20;

    describe_age(console, name, age);

    greet(console, name);
    console.log(&format!("Sum of 5 and 10: {}", sum(5, 10)));

    count_for(console);
    count_while(console);

    apply_page_changes(page)
}

/// Build the demo page the script expects: a body holding the four
/// identified elements
pub fn demo_page() -> Page {
    let mut tree = DomTree::new();
    let body = tree.create_element("body");
    tree.append_child(tree.document_id(), body)
        .expect("document node always exists");

    for (id, tag) in [
        ("dom-example-1", "div"),
        ("dom-example-2", "div"),
        ("actionBtn", "button"),
        ("dom-example-3", "div"),
    ] {
        let node = tree.create_element(tag);
        if let Some(elem) = tree.get_mut(node).and_then(|n| n.as_element_mut()) {
            elem.set_attribute("id", id);
        }
        tree.append_child(body, node)
            .expect("body was just inserted");
    }

    Page::new(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagelet_host::RecordingConsole;

    #[test]
    fn test_describe_age_adult() {
        let mut console = RecordingConsole::new();
        describe_age(&mut console, "Terry", 20);
        assert_eq!(console.lines(), ["Terry is an adult."]);
    }

    #[test]
    fn test_describe_age_minor() {
        let mut console = RecordingConsole::new();
        describe_age(&mut console, "Terry", 17);
        assert_eq!(console.lines(), ["Terry is not an adult."]);

        let mut console = RecordingConsole::new();
        describe_age(&mut console, "Terry", 0);
        assert_eq!(console.lines(), ["Terry is not an adult."]);
    }

    #[test]
    fn test_describe_age_threshold() {
        let mut console = RecordingConsole::new();
        describe_age(&mut console, "Terry", 18);
        assert_eq!(console.lines(), ["Terry is an adult."]);
    }

    #[test]
    fn test_greet_emits_one_line() {
        let mut console = RecordingConsole::new();
        greet(&mut console, "X");
        assert_eq!(console.lines(), ["Hello, X! Welcome to the site."]);
    }

    #[test]
    fn test_sum() {
        assert_eq!(sum(5, 10), 15);
        assert_eq!(sum(10, 5), 15);
        assert_eq!(sum(-3, 3), 0);
        assert_eq!(sum(0, 0), 0);
    }

    #[test]
    fn test_count_for() {
        let mut console = RecordingConsole::new();
        count_for(&mut console);
        assert_eq!(
            console.lines(),
            [
                "For loop iteration: 0",
                "For loop iteration: 1",
                "For loop iteration: 2",
                "For loop iteration: 3",
                "For loop iteration: 4",
            ]
        );
    }

    #[test]
    fn test_count_while() {
        let mut console = RecordingConsole::new();
        let final_count = count_while(&mut console);
        assert_eq!(final_count, 3);
        assert_eq!(
            console.lines(),
            [
                "While loop iteration: 0",
                "While loop iteration: 1",
                "While loop iteration: 2",
            ]
        );
    }
}
