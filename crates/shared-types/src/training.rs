use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::AppError;
use crate::layers::{LayerKind, LayerStack};
use crate::numeric_field::NumericConstraints;

/// Recurrent cell type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RnnType {
    #[default]
    Gru,
    Lstm,
}

impl RnnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RnnType::Gru => "gru",
            RnnType::Lstm => "lstm",
        }
    }
}

/// Training parameters edited through the sidebar panels.
///
/// Owned by whichever component hosts the form and handed down to the
/// panels; a partial TOML or JSON document fills the rest from defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    pub rnn_type: RnnType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    pub column_data: String,
    pub epochs: u32,
    pub n_steps_ahead: u32,
    pub window_size: u32,
    pub learning_rate: f64,
    pub dropout_rate: f64,
    pub early_stopping_patience: u32,
    pub multi_feature: bool,
    pub rnn_units: Vec<u32>,
    pub dense_units: Vec<u32>,
    pub dense_activation: String,
    #[serde(alias = "bidirecional")]
    pub bidirectional: bool,
    pub batch_size: u32,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            rnn_type: RnnType::Gru,
            device: None,
            attribute: None,
            column_data: String::new(),
            epochs: 1,
            n_steps_ahead: 1,
            window_size: 60,
            learning_rate: 0.001,
            dropout_rate: 0.2,
            early_stopping_patience: 5,
            multi_feature: false,
            rnn_units: vec![128],
            dense_units: vec![64],
            dense_activation: "relu".to_string(),
            bidirectional: false,
            batch_size: 16,
        }
    }
}

/// Partial update; `None` leaves the current value alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfigPatch {
    pub rnn_type: Option<RnnType>,
    pub device: Option<String>,
    pub attribute: Option<String>,
    pub column_data: Option<String>,
    pub epochs: Option<u32>,
    pub n_steps_ahead: Option<u32>,
    pub window_size: Option<u32>,
    pub learning_rate: Option<f64>,
    pub dropout_rate: Option<f64>,
    pub early_stopping_patience: Option<u32>,
    pub multi_feature: Option<bool>,
    pub rnn_units: Option<Vec<u32>>,
    pub dense_units: Option<Vec<u32>>,
    pub dense_activation: Option<String>,
    #[serde(alias = "bidirecional")]
    pub bidirectional: Option<bool>,
    pub batch_size: Option<u32>,
}

/// Numeric parameters that are edited through a number input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericTrainingField {
    Epochs,
    StepsAhead,
    WindowSize,
    LearningRate,
    DropoutRate,
    EarlyStoppingPatience,
    BatchSize,
}

impl NumericTrainingField {
    pub const ALL: [NumericTrainingField; 7] = [
        NumericTrainingField::Epochs,
        NumericTrainingField::StepsAhead,
        NumericTrainingField::WindowSize,
        NumericTrainingField::LearningRate,
        NumericTrainingField::DropoutRate,
        NumericTrainingField::EarlyStoppingPatience,
        NumericTrainingField::BatchSize,
    ];

    /// Field id, matching the serialized key.
    pub fn id(&self) -> &'static str {
        match self {
            NumericTrainingField::Epochs => "epochs",
            NumericTrainingField::StepsAhead => "n_steps_ahead",
            NumericTrainingField::WindowSize => "window_size",
            NumericTrainingField::LearningRate => "learning_rate",
            NumericTrainingField::DropoutRate => "dropout_rate",
            NumericTrainingField::EarlyStoppingPatience => "early_stopping_patience",
            NumericTrainingField::BatchSize => "batch_size",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NumericTrainingField::Epochs => "Epochs",
            NumericTrainingField::StepsAhead => "Steps ahead",
            NumericTrainingField::WindowSize => "Input window",
            NumericTrainingField::LearningRate => "Learning rate",
            NumericTrainingField::DropoutRate => "Dropout rate",
            NumericTrainingField::EarlyStoppingPatience => "Early stopping patience",
            NumericTrainingField::BatchSize => "Batch size",
        }
    }

    pub fn constraints(&self) -> NumericConstraints {
        let base = NumericConstraints::default().non_negative();
        match self {
            NumericTrainingField::LearningRate => base
                .with_min(0.000001)
                .with_max(1.0)
                .with_decimal_places(6),
            NumericTrainingField::DropoutRate => base
                .with_min(0.00001)
                .with_max(1.0)
                .with_decimal_places(5),
            _ => base.with_min(1.0).with_decimal_places(0),
        }
    }

    /// Message shown when the value is missing or out of range.
    pub fn error_message(&self) -> &'static str {
        match self {
            NumericTrainingField::Epochs => "Epochs must be at least 1",
            NumericTrainingField::StepsAhead => "Steps ahead must be at least 1",
            NumericTrainingField::WindowSize => "Input window must be at least 1",
            NumericTrainingField::LearningRate => "Learning rate must be between 0.000001 and 1",
            NumericTrainingField::DropoutRate => "Dropout rate must be between 0.00001 and 1",
            NumericTrainingField::EarlyStoppingPatience => {
                "Early stopping patience must be at least 1"
            }
            NumericTrainingField::BatchSize => "Batch size must be at least 1",
        }
    }

    /// Error for a value coming out of a number input, if any.
    pub fn check(&self, value: Option<f64>) -> Option<&'static str> {
        match value {
            Some(v) if self.constraints().validate(v) => None,
            _ => Some(self.error_message()),
        }
    }
}

impl TrainingConfig {
    pub fn apply(&mut self, patch: TrainingConfigPatch) {
        if let Some(v) = patch.rnn_type {
            self.rnn_type = v;
        }
        if let Some(v) = patch.device {
            self.device = Some(v);
        }
        if let Some(v) = patch.attribute {
            self.attribute = Some(v);
        }
        if let Some(v) = patch.column_data {
            self.column_data = v;
        }
        if let Some(v) = patch.epochs {
            self.epochs = v;
        }
        if let Some(v) = patch.n_steps_ahead {
            self.n_steps_ahead = v;
        }
        if let Some(v) = patch.window_size {
            self.window_size = v;
        }
        if let Some(v) = patch.learning_rate {
            self.learning_rate = v;
        }
        if let Some(v) = patch.dropout_rate {
            self.dropout_rate = v;
        }
        if let Some(v) = patch.early_stopping_patience {
            self.early_stopping_patience = v;
        }
        if let Some(v) = patch.multi_feature {
            self.multi_feature = v;
        }
        if let Some(v) = patch.rnn_units {
            self.rnn_units = v;
        }
        if let Some(v) = patch.dense_units {
            self.dense_units = v;
        }
        if let Some(v) = patch.dense_activation {
            self.dense_activation = v;
        }
        if let Some(v) = patch.bidirectional {
            self.bidirectional = v;
        }
        if let Some(v) = patch.batch_size {
            self.batch_size = v;
        }
    }

    pub fn get(&self, field: NumericTrainingField) -> f64 {
        match field {
            NumericTrainingField::Epochs => f64::from(self.epochs),
            NumericTrainingField::StepsAhead => f64::from(self.n_steps_ahead),
            NumericTrainingField::WindowSize => f64::from(self.window_size),
            NumericTrainingField::LearningRate => self.learning_rate,
            NumericTrainingField::DropoutRate => self.dropout_rate,
            NumericTrainingField::EarlyStoppingPatience => f64::from(self.early_stopping_patience),
            NumericTrainingField::BatchSize => f64::from(self.batch_size),
        }
    }

    /// Store a number input's value. A cleared input falls back to the
    /// field's minimum; integer fields round to the nearest whole number.
    pub fn set_numeric(&mut self, field: NumericTrainingField, value: Option<f64>) {
        let floor = field.constraints().min.unwrap_or(0.0);
        let value = value.unwrap_or(floor);
        let whole = value.round().max(0.0) as u32;
        match field {
            NumericTrainingField::Epochs => self.epochs = whole,
            NumericTrainingField::StepsAhead => self.n_steps_ahead = whole,
            NumericTrainingField::WindowSize => self.window_size = whole,
            NumericTrainingField::LearningRate => self.learning_rate = value,
            NumericTrainingField::DropoutRate => self.dropout_rate = value,
            NumericTrainingField::EarlyStoppingPatience => self.early_stopping_patience = whole,
            NumericTrainingField::BatchSize => self.batch_size = whole,
        }
        tracing::debug!(field = field.id(), value, "training field updated");
    }

    /// Copy the layer stack's neuron counts into the unit lists.
    pub fn sync_layers(&mut self, layers: &LayerStack) {
        self.rnn_units = layers.units(LayerKind::Rnn);
        self.dense_units = layers.units(LayerKind::Dense);
    }

    /// Check every numeric field, collecting messages keyed by field id.
    pub fn validate(&self) -> Result<(), AppError> {
        let field_errors: BTreeMap<String, String> = NumericTrainingField::ALL
            .iter()
            .filter_map(|field| {
                field
                    .check(Some(self.get(*field)))
                    .map(|msg| (field.id().to_string(), msg.to_string()))
            })
            .collect();

        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation("Training configuration is invalid", field_errors))
        }
    }
}
