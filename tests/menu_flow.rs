//! End-to-end menu flow: registration through reactive re-render.
//!
//! These tests drive the whole path a UI would use: items registered through
//! component handles, a consumer effect reading a slot through the hook, and
//! the host loop pumping `flush()` to deliver coalesced notifications.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_menu::{Menu, PropsSource, RegisterArgs};
use spark_signals::{effect, signal};

#[derive(Default)]
struct LabelProps {
    title: String,
}

fn label_menu() -> (
    Menu<String>,
    spark_menu::ComponentHandle<LabelProps, String>,
) {
    let menu = Menu::<String>::builder().slots(["a", "b"]).build();
    let label = menu.component("label", |props: &LabelProps| props.title.clone());
    (menu, label)
}

fn labeled(id: &str, slot: &str, title: &str) -> RegisterArgs<LabelProps> {
    RegisterArgs {
        id: id.into(),
        slot: Some(slot.into()),
        props: PropsSource::Static(LabelProps {
            title: title.into(),
        }),
        ..Default::default()
    }
}

#[test]
fn consumer_renders_registered_items_in_order() {
    let (menu, label) = label_menu();

    label
        .register(RegisterArgs {
            id: "x".into(),
            priority: 10,
            props: PropsSource::Static(LabelProps { title: "X".into() }),
            ..Default::default()
        })
        .unwrap();
    label
        .register(RegisterArgs {
            id: "y".into(),
            priority: 1,
            props: PropsSource::Static(LabelProps { title: "Y".into() }),
            ..Default::default()
        })
        .unwrap();

    let output = Rc::new(RefCell::new(Vec::new()));
    let output_clone = output.clone();
    let hook = menu.slot_items_hook();

    let _stop = effect(move || {
        let rendered: Vec<String> = hook
            .read_default()
            .iter()
            .map(|item| (item.render)())
            .collect();
        *output_clone.borrow_mut() = rendered;
    });

    assert_eq!(*output.borrow(), vec!["Y", "X"]);
}

#[test]
fn burst_of_registrations_rerenders_once() {
    let (menu, label) = label_menu();

    let runs = Rc::new(Cell::new(0u32));
    let runs_clone = runs.clone();
    let hook = menu.slot_items_hook();
    let seen = Rc::new(Cell::new(0usize));
    let seen_clone = seen.clone();

    let _stop = effect(move || {
        seen_clone.set(hook.read("a").len());
        runs_clone.set(runs_clone.get() + 1);
    });
    assert_eq!(runs.get(), 1);

    // Three registrations within one "tick".
    label.register(labeled("1", "a", "one")).unwrap();
    label.register(labeled("2", "a", "two")).unwrap();
    label.register(labeled("3", "a", "three")).unwrap();

    // Nothing delivered yet - the mutating calls never render inline.
    assert_eq!(runs.get(), 1);
    assert!(menu.has_pending());

    menu.flush();
    assert_eq!(runs.get(), 2);
    assert_eq!(seen.get(), 3);

    // An empty tick delivers nothing.
    menu.flush();
    assert_eq!(runs.get(), 2);
}

#[test]
fn consumer_of_other_slot_never_rerenders() {
    let (menu, label) = label_menu();

    let runs_a = Rc::new(Cell::new(0u32));
    let runs_a_clone = runs_a.clone();
    let hook_a = menu.slot_items_hook();

    let _stop = effect(move || {
        let _ = hook_a.read("a");
        runs_a_clone.set(runs_a_clone.get() + 1);
    });
    assert_eq!(runs_a.get(), 1);

    label.register(labeled("only-b", "b", "B")).unwrap();
    menu.flush();

    // Slot "b" changed; the "a" consumer stayed put.
    assert_eq!(runs_a.get(), 1);
    assert!(menu.slot_items("a").is_empty());
    assert_eq!(menu.slot_items("b").len(), 1);
}

#[test]
fn unregister_rerenders_and_empties_the_slot() {
    let (menu, label) = label_menu();
    label.register(labeled("x", "a", "X")).unwrap();
    menu.flush();

    let seen = Rc::new(Cell::new(usize::MAX));
    let seen_clone = seen.clone();
    let hook = menu.slot_items_hook();

    let _stop = effect(move || {
        seen_clone.set(hook.read("a").len());
    });
    assert_eq!(seen.get(), 1);

    menu.unregister("x");
    menu.flush();
    assert_eq!(seen.get(), 0);

    // Repeat unregister: no-op, no pending work, no re-render.
    menu.unregister("x");
    assert!(!menu.has_pending());
}

#[test]
fn override_rerenders_with_new_content() {
    let (menu, label) = label_menu();
    label.register(labeled("item", "a", "initial")).unwrap();
    menu.flush();

    let output = Rc::new(RefCell::new(Vec::new()));
    let output_clone = output.clone();
    let hook = menu.slot_items_hook();

    let _stop = effect(move || {
        *output_clone.borrow_mut() = hook
            .read("a")
            .iter()
            .map(|item| (item.render)())
            .collect::<Vec<String>>();
    });
    assert_eq!(*output.borrow(), vec!["initial"]);

    label
        .register(RegisterArgs {
            override_existing: true,
            ..labeled("item", "a", "updated")
        })
        .unwrap();
    menu.flush();

    assert_eq!(*output.borrow(), vec!["updated"]);
}

#[test]
fn hook_follows_the_current_slot_argument() {
    let (menu, label) = label_menu();

    let which = signal("a".to_string());
    let runs = Rc::new(Cell::new(0u32));
    let runs_clone = runs.clone();
    let hook = menu.slot_items_hook();

    let which_clone = which.clone();
    let _stop = effect(move || {
        let slot = which_clone.get();
        let _ = hook.read(&slot);
        runs_clone.set(runs_clone.get() + 1);
    });
    assert_eq!(runs.get(), 1);

    // Consumer switches slots; the subscription must follow.
    which.set("b".to_string());
    assert_eq!(runs.get(), 2);

    label.register(labeled("old", "a", "A")).unwrap();
    menu.flush();
    assert_eq!(runs.get(), 2); // Old slot no longer re-renders this consumer.

    label.register(labeled("new", "b", "B")).unwrap();
    menu.flush();
    assert_eq!(runs.get(), 3);
}

#[test]
fn stopped_consumer_is_torn_down() {
    let (menu, label) = label_menu();

    let runs = Rc::new(Cell::new(0u32));
    let runs_clone = runs.clone();
    let hook = menu.slot_items_hook();

    let stop = effect(move || {
        let _ = hook.read("a");
        runs_clone.set(runs_clone.get() + 1);
    });
    assert_eq!(runs.get(), 1);

    // The effect owned the hook; stopping drops it and unsubscribes.
    stop();

    label.register(labeled("late", "a", "late")).unwrap();
    menu.flush();
    assert_eq!(runs.get(), 1);
}

#[test]
fn dynamic_props_rerender_with_fresh_values() {
    let (menu, label) = label_menu();

    let count = signal(0i32);
    let count_clone = count.clone();
    label
        .register(RegisterArgs {
            id: "counter".into(),
            slot: Some("a".into()),
            props: PropsSource::getter(move || LabelProps {
                title: format!("count: {}", count_clone.get()),
            }),
            ..Default::default()
        })
        .unwrap();
    menu.flush();

    let items = menu.slot_items("a");
    assert_eq!((items[0].render)(), "count: 0");

    // The accessor runs at render time, so later renders see fresh state.
    count.set(7);
    assert_eq!((items[0].render)(), "count: 7");
}

#[test]
fn two_consumers_one_slot_both_rerender_once() {
    let (menu, label) = label_menu();

    let runs_1 = Rc::new(Cell::new(0u32));
    let runs_2 = Rc::new(Cell::new(0u32));

    let runs_1_clone = runs_1.clone();
    let hook_1 = menu.slot_items_hook();
    let _stop_1 = effect(move || {
        let _ = hook_1.read("a");
        runs_1_clone.set(runs_1_clone.get() + 1);
    });

    let runs_2_clone = runs_2.clone();
    let hook_2 = menu.slot_items_hook();
    let _stop_2 = effect(move || {
        let _ = hook_2.read("a");
        runs_2_clone.set(runs_2_clone.get() + 1);
    });

    label.register(labeled("1", "a", "one")).unwrap();
    label.register(labeled("2", "a", "two")).unwrap();
    menu.flush();

    assert_eq!(runs_1.get(), 2);
    assert_eq!(runs_2.get(), 2);
}
