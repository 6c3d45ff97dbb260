use dioxus::prelude::*;
use shared_types::{SidebarItem, SidebarRegistry};

// ─── Context ───────────────────────────────────────────────────────────

/// Provides the sidebar registry to children.
///
/// `items` seeds the rail; panels can still register more through
/// [`use_sidebar`] later on.
#[component]
pub fn SidebarProvider(
    #[props(default)] items: Vec<SidebarItem>,
    #[props(default)] default_active_item_id: Option<String>,
    children: Element,
) -> Element {
    let registry = use_signal(|| SidebarRegistry::new(items, default_active_item_id));
    use_context_provider(|| registry);

    let has_active = registry.read().active_item().is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-panel-open": if has_active { "true" } else { "false" },
            {children}
        }
    }
}

/// Hook to access the sidebar registry. Panics outside a `SidebarProvider`.
pub fn use_sidebar() -> Signal<SidebarRegistry> {
    use_context::<Signal<SidebarRegistry>>()
}

// ─── Layout components ─────────────────────────────────────────────────

/// Icon rail plus the panel of the active item.
///
/// Clicking an item opens its panel, clicking it again closes it.
/// `on_item_change` receives the new active id after every toggle.
#[component]
pub fn Sidebar(
    #[props(default)] on_item_change: EventHandler<Option<String>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let registry = use_sidebar();
    let items = registry.read().items().to_vec();
    let has_active = registry.read().active_item().is_some();

    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new("role", "complementary", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        aside {
            ..merged,
            nav { class: "sidebar-rail",
                for item in items {
                    SidebarRailItem { key: "{item.id}", item: item.clone(), on_item_change: on_item_change }
                }
            }
            if has_active {
                div { class: "sidebar-panels", {children} }
            }
        }
    }
}

/// A single button in the sidebar rail.
#[component]
pub fn SidebarRailItem(item: SidebarItem, on_item_change: EventHandler<Option<String>>) -> Element {
    let mut registry = use_sidebar();
    let is_active = registry.read().is_active(&item.id);
    let id = item.id.clone();

    rsx! {
        button {
            class: "sidebar-rail-item",
            r#type: "button",
            "data-active": if is_active { "true" } else { "false" },
            "data-icon": "{item.icon}",
            "aria-pressed": if is_active { "true" } else { "false" },
            title: item.tooltip.clone().unwrap_or_else(|| item.label.clone()),
            disabled: item.disabled,
            onclick: move |_| {
                registry.write().toggle(&id);
                let active = registry.read().active_item_id().map(str::to_string);
                on_item_change.call(active);
            },
            span { class: "sidebar-rail-label", "{item.label}" }
        }
    }
}

/// Content shown while the item `item_id` is active.
#[component]
pub fn SidebarPanel(
    item_id: String,
    #[props(default)] title: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let registry = use_sidebar();
    if !registry.read().is_active(&item_id) {
        return rsx! {};
    }

    let base = vec![
        Attribute::new("class", "sidebar-panel", None, false),
        Attribute::new("data-item", item_id.clone(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        section {
            ..merged,
            if !title.is_empty() {
                h2 { class: "sidebar-panel-title", "{title}" }
            }
            div { class: "sidebar-panel-body", {children} }
        }
    }
}

/// The main content area that sits alongside the Sidebar.
#[component]
pub fn SidebarInset(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-inset", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        main {
            ..merged,
            {children}
        }
    }
}
