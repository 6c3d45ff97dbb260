use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaGripVertical, FaXmark};
use dioxus_free_icons::Icon;
use shared_types::{moved_order, LayerKind, LayerStack};
use uuid::Uuid;

/// One kind of layer from a shared [`LayerStack`], reorderable by dragging
/// a row onto another row.
///
/// The browser's drag events only report which row was dropped where; the
/// new order is applied through [`LayerStack::reorder`]. `on_units_change`
/// receives the neuron counts after every reorder or removal.
#[component]
pub fn LayerList(
    stack: Signal<LayerStack>,
    kind: LayerKind,
    #[props(default)] title: String,
    #[props(default)] on_units_change: EventHandler<Vec<u32>>,
) -> Element {
    let mut stack = stack;
    let mut dragging = use_signal(|| None::<Uuid>);
    let layers = stack.read().layers(kind).to_vec();
    let kind_label = kind.as_str();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "layer-list", "data-kind": kind_label,
            if !title.is_empty() {
                h3 { class: "layer-list-title", "{title}" }
            }
            if layers.is_empty() {
                div { class: "layer-list-empty",
                    p { "No layers added yet." }
                    p { class: "layer-list-empty-hint", "Use the form above to add layers." }
                }
            } else {
                ul { class: "layer-list-items",
                    {layers.into_iter().map(|layer| {
                        let id = layer.id;
                        rsx! {
                            li {
                                key: "{id}",
                                class: "layer-list-item",
                                "data-id": "{id}",
                                draggable: "true",
                                ondragstart: move |_| dragging.set(Some(id)),
                                ondragover: move |evt: DragEvent| evt.prevent_default(),
                                ondrop: move |evt: DragEvent| {
                                    evt.prevent_default();
                                    let Some(from) = dragging.write().take() else {
                                        return;
                                    };
                                    let ids: Vec<Uuid> =
                                        stack.read().layers(kind).iter().map(|l| l.id).collect();
                                    let order = moved_order(&ids, from, id);
                                    stack.write().reorder(kind, &order);
                                    on_units_change.call(stack.read().units(kind));
                                },
                                span { class: "layer-list-handle",
                                    Icon::<FaGripVertical> { icon: FaGripVertical, width: 12, height: 16 }
                                }
                                div { class: "layer-list-text",
                                    span { class: "layer-list-name", "{kind_label} layer" }
                                    span { class: "layer-list-neurons", "{layer.neurons} neurons" }
                                }
                                button {
                                    class: "layer-list-remove",
                                    r#type: "button",
                                    title: "Remove layer",
                                    onclick: move |_| {
                                        let removed = stack.write().remove(kind, id);
                                        if let Err(err) = removed {
                                            tracing::warn!(%err, "layer remove failed");
                                            return;
                                        }
                                        on_units_change.call(stack.read().units(kind));
                                    },
                                    Icon::<FaXmark> { icon: FaXmark, width: 12, height: 12 }
                                }
                            }
                        }
                    })}
                }
            }
        }
    }
}
