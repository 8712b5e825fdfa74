//! Toolbar Example - Slots, priorities, and reactive re-rendering
//!
//! This example demonstrates the menu registry:
//! - Declaring components and registering items into slots
//! - Priority ordering and override semantics
//! - A consumer effect re-rendering when its slot changes
//!
//! Run with: cargo run -p spark-menu --example toolbar

use std::cell::RefCell;
use std::rc::Rc;

use spark_menu::{Menu, PropsSource, RegisterArgs};
use spark_signals::effect;

#[derive(Default)]
struct ButtonProps {
    label: String,
}

fn main() {
    println!("=== spark-menu Toolbar Example ===\n");

    let menu = Menu::<String>::builder()
        .slots(["toolbar", "statusbar"])
        .build();

    let button = menu.component("button", |props: &ButtonProps| {
        format!("[{}]", props.label)
    });
    let divider = menu.component("divider", |_: &()| "|".to_string());

    // A consumer bound to the toolbar slot.
    let output = Rc::new(RefCell::new(String::new()));
    let output_clone = output.clone();
    let hook = menu.slot_items_hook();
    let _stop = effect(move || {
        let line: Vec<String> = hook
            .read("toolbar")
            .iter()
            .map(|item| (item.render)())
            .collect();
        *output_clone.borrow_mut() = line.join(" ");
    });

    // Register items - priorities decide the order, not call order.
    button
        .register(RegisterArgs {
            id: "quit".into(),
            slot: Some("toolbar".into()),
            priority: 90,
            props: PropsSource::Static(ButtonProps {
                label: "Quit".into(),
            }),
            ..Default::default()
        })
        .unwrap();
    button
        .register(RegisterArgs {
            id: "save".into(),
            slot: Some("toolbar".into()),
            priority: 1,
            props: PropsSource::Static(ButtonProps {
                label: "Save".into(),
            }),
            ..Default::default()
        })
        .unwrap();
    divider
        .register(RegisterArgs {
            id: "sep".into(),
            slot: Some("toolbar".into()),
            priority: 50,
            ..Default::default()
        })
        .unwrap();

    // The consumer has not re-rendered yet - delivery is deferred.
    println!("Before flush: \"{}\"", output.borrow());

    menu.flush();
    println!("After flush:  \"{}\"", output.borrow());

    // Override the save button in place.
    button
        .register(RegisterArgs {
            id: "save".into(),
            slot: Some("toolbar".into()),
            priority: 1,
            override_existing: true,
            props: PropsSource::Static(ButtonProps {
                label: "Save All".into(),
            }),
            ..Default::default()
        })
        .unwrap();
    menu.flush();
    println!("After override: \"{}\"", output.borrow());

    // Remove the divider.
    menu.unregister("sep");
    menu.flush();
    println!("After unregister: \"{}\"", output.borrow());
}
