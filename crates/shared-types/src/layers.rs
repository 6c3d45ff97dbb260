use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Which stack a layer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerKind {
    #[serde(rename = "RNN")]
    Rnn,
    Dense,
}

impl LayerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayerKind::Rnn => "RNN",
            LayerKind::Dense => "Dense",
        }
    }
}

/// A single network layer in the model builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub id: Uuid,
    pub neurons: u32,
    #[serde(rename = "type")]
    pub kind: LayerKind,
}

impl Layer {
    pub fn new(kind: LayerKind, neurons: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            neurons,
            kind,
        }
    }
}

/// Ordered RNN and Dense layer lists.
///
/// The drag gesture itself happens outside this type; once it ends the
/// caller reports the visual order as a list of ids and `reorder` brings
/// the state in line with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerStack {
    pub rnn: Vec<Layer>,
    pub dense: Vec<Layer>,
}

impl Default for LayerStack {
    fn default() -> Self {
        Self {
            rnn: vec![Layer::new(LayerKind::Rnn, 128)],
            dense: vec![Layer::new(LayerKind::Dense, 64)],
        }
    }
}

impl LayerStack {
    pub fn empty() -> Self {
        Self {
            rnn: Vec::new(),
            dense: Vec::new(),
        }
    }

    pub fn layers(&self, kind: LayerKind) -> &[Layer] {
        match kind {
            LayerKind::Rnn => &self.rnn,
            LayerKind::Dense => &self.dense,
        }
    }

    fn layers_mut(&mut self, kind: LayerKind) -> &mut Vec<Layer> {
        match kind {
            LayerKind::Rnn => &mut self.rnn,
            LayerKind::Dense => &mut self.dense,
        }
    }

    /// Neuron counts in display order.
    pub fn units(&self, kind: LayerKind) -> Vec<u32> {
        self.layers(kind).iter().map(|layer| layer.neurons).collect()
    }

    /// Append a layer and return its id. A layer needs at least one neuron.
    pub fn add(&mut self, kind: LayerKind, neurons: u32) -> Result<Uuid, AppError> {
        if neurons == 0 {
            return Err(AppError::bad_request("A layer needs at least one neuron"));
        }
        let layer = Layer::new(kind, neurons);
        let id = layer.id;
        self.layers_mut(kind).push(layer);
        tracing::debug!(%id, kind = kind.as_str(), neurons, "layer added");
        Ok(id)
    }

    pub fn remove(&mut self, kind: LayerKind, id: Uuid) -> Result<Layer, AppError> {
        let layers = self.layers_mut(kind);
        let index = layers
            .iter()
            .position(|layer| layer.id == id)
            .ok_or_else(|| AppError::not_found(format!("{} layer {} not found", kind.as_str(), id)))?;
        let removed = layers.remove(index);
        tracing::debug!(%id, kind = kind.as_str(), "layer removed");
        Ok(removed)
    }

    /// Rebuild a list in the order of `ids`. Unknown ids are skipped and
    /// layers missing from `ids` are dropped.
    pub fn reorder(&mut self, kind: LayerKind, ids: &[Uuid]) {
        let layers = self.layers_mut(kind);
        let reordered: Vec<Layer> = ids
            .iter()
            .filter_map(|id| layers.iter().find(|layer| layer.id == *id).cloned())
            .collect();
        if reordered.len() != layers.len() {
            tracing::debug!(
                kind = kind.as_str(),
                before = layers.len(),
                after = reordered.len(),
                "reorder changed layer count"
            );
        }
        *layers = reordered;
    }
}

/// Order of `ids` after dropping `from` onto `to`: `from` takes `to`'s
/// slot and the items in between shift by one.
pub fn moved_order(ids: &[Uuid], from: Uuid, to: Uuid) -> Vec<Uuid> {
    let mut order = ids.to_vec();
    let (Some(from_index), Some(to_index)) = (
        order.iter().position(|id| *id == from),
        order.iter().position(|id| *id == to),
    ) else {
        return order;
    };
    let moved = order.remove(from_index);
    order.insert(to_index, moved);
    order
}
