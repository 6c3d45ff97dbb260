//! Server-side rendering of the form components.

use crate::common::render;
use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use shared_types::{LayerKind, LayerStack, NumericConstraints, SidebarItem};
use shared_ui::components::{
    InputSize, LayerList, NumberInput, Sidebar, SidebarPanel, SidebarProvider,
};

#[test]
fn number_input_renders_seeded_text() {
    fn app() -> Element {
        rsx! {
            NumberInput {
                value: 60.0,
                constraints: NumericConstraints::default().with_decimal_places(0),
                size: InputSize::Lg,
                placeholder: "1",
            }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"inputmode="decimal""#));
    assert!(html.contains(r#"type="text""#));
    assert!(html.contains(r#"value="60""#));
    assert!(html.contains(r#"data-size="lg""#));
    assert!(html.contains(r#"data-error="false""#));
}

#[test]
fn number_input_marks_error_state() {
    fn app() -> Element {
        rsx! { NumberInput { has_error: true } }
    }
    let html = render(app);
    assert!(html.contains(r#"data-error="true""#));
}

fn items() -> Vec<SidebarItem> {
    let mut analytics = SidebarItem::new("analytics", "Analytics");
    analytics.disabled = true;
    vec![
        SidebarItem::new("data", "Data"),
        SidebarItem::new("rnn", "RNN"),
        analytics,
    ]
}

#[test]
fn sidebar_renders_only_active_panel() {
    fn app() -> Element {
        rsx! {
            SidebarProvider { items: items(), default_active_item_id: "data".to_string(),
                Sidebar {
                    SidebarPanel { item_id: "data", title: "Data configuration", "data-body" }
                    SidebarPanel { item_id: "rnn", title: "RNN configuration", "rnn-body" }
                }
            }
        }
    }
    let html = render(app);
    assert!(html.contains("Data configuration"));
    assert!(html.contains("data-body"));
    assert!(!html.contains("rnn-body"));
    assert_eq!(html.matches(r#"class="sidebar-rail-item""#).count(), 3);
    assert_eq!(html.matches(r#"data-active="true""#).count(), 1);
}

#[test]
fn sidebar_without_active_item_hides_panels() {
    fn app() -> Element {
        rsx! {
            SidebarProvider { items: items(),
                Sidebar {
                    SidebarPanel { item_id: "data", "data-body" }
                }
            }
        }
    }
    let html = render(app);
    assert!(!html.contains("data-body"));
    assert!(html.contains(r#"data-panel-open="false""#));
}

#[test]
fn layer_list_renders_rows_with_ids() {
    fn app() -> Element {
        let stack = use_signal(LayerStack::default);
        rsx! {
            LayerList { stack: stack, kind: LayerKind::Rnn, title: "RNN layers" }
        }
    }
    let html = render(app);
    assert!(html.contains("RNN layers"));
    assert!(html.contains("128 neurons"));
    assert_eq!(html.matches(r#"class="layer-list-item""#).count(), 1);
    assert_eq!(html.matches("data-id=").count(), 1);
    assert!(html.contains(r#"draggable="true""#));
    assert!(!html.contains("64 neurons"));
}

#[test]
fn empty_layer_list_shows_placeholder() {
    fn app() -> Element {
        let stack = use_signal(LayerStack::empty);
        rsx! { LayerList { stack: stack, kind: LayerKind::Dense } }
    }
    let html = render(app);
    assert!(html.contains("No layers added yet."));
    assert_eq!(html.matches(r#"class="layer-list-item""#).count(), 0);
}
