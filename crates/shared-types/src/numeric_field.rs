use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Complete literal, negative sign allowed.
static SIGNED_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?(\d+\.?\d*|\.\d+)$").expect("valid literal pattern"));

/// Complete literal, digits only.
static UNSIGNED_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+\.?\d*|\.\d+)$").expect("valid literal pattern"));

/// Leading numeric prefix of a cleaned string, mirroring `parseFloat`.
static NUMERIC_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?(\d+\.?\d*|\.\d+)").expect("valid prefix pattern"));

fn default_allow_negative() -> bool {
    true
}

fn default_decimal_places() -> u32 {
    2
}

/// Numeric rules for a single input. Fixed for the lifetime of a field.
///
/// `min > max` is a caller contract violation and is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericConstraints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default = "default_allow_negative")]
    pub allow_negative: bool,
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
}

impl Default for NumericConstraints {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            allow_negative: default_allow_negative(),
            decimal_places: default_decimal_places(),
        }
    }
}

impl NumericConstraints {
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn with_decimal_places(mut self, decimal_places: u32) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    pub fn non_negative(mut self) -> Self {
        self.allow_negative = false;
        self
    }

    /// First rule `value` breaks, checked in sign, min, max order.
    pub fn violation(&self, value: f64) -> Option<ConstraintViolation> {
        if !self.allow_negative && value < 0.0 {
            return Some(ConstraintViolation::NegativeNotAllowed);
        }
        if let Some(min) = self.min {
            if value < min {
                return Some(ConstraintViolation::BelowMin(min));
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return Some(ConstraintViolation::AboveMax(max));
            }
        }
        None
    }

    /// Pure predicate; never clamps.
    pub fn validate(&self, value: f64) -> bool {
        self.violation(value).is_none()
    }

    fn literal_pattern(&self) -> &'static Regex {
        if self.allow_negative {
            &*SIGNED_LITERAL
        } else {
            &*UNSIGNED_LITERAL
        }
    }

    /// Text that is not yet a number but is a valid step towards one:
    /// a lone sign, or a valid prefix followed by a single trailing `.`.
    fn is_intermediate(&self, text: &str) -> bool {
        if text == "-" {
            return self.allow_negative;
        }
        let Some(head) = text.strip_suffix('.') else {
            return false;
        };
        let digits = match head.strip_prefix('-') {
            Some(rest) if self.allow_negative => rest,
            Some(_) => return false,
            None => head,
        };
        digits.chars().all(|c| c.is_ascii_digit())
    }
}

/// Which numeric rule a value breaks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstraintViolation {
    NegativeNotAllowed,
    BelowMin(f64),
    AboveMax(f64),
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintViolation::NegativeNotAllowed => write!(f, "Negative values are not allowed"),
            ConstraintViolation::BelowMin(min) => write!(f, "Value must be at least {}", min),
            ConstraintViolation::AboveMax(max) => write!(f, "Value must be at most {}", max),
        }
    }
}

/// Locally handled conditions. None of them are fatal.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldIssue {
    /// Candidate text failed the literal grammar and was discarded.
    RejectedEdit,
    /// Text could not be parsed at blur time and was left as typed.
    UnparseableOnFinalize,
    /// Text parsed but broke a constraint; left as typed.
    OutOfRange(ConstraintViolation),
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldIssue::RejectedEdit => write!(f, "RejectedEdit"),
            FieldIssue::UnparseableOnFinalize => write!(f, "UnparseableOnFinalize"),
            FieldIssue::OutOfRange(violation) => write!(f, "OutOfRange: {}", violation),
        }
    }
}

/// What an edit did to the field.
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// Text cleared; the caller is notified with `None`.
    Cleared,
    /// Accepted but not yet a number; nothing is emitted.
    Intermediate,
    /// Accepted complete literal; the caller is notified with the value.
    Changed(f64),
    /// Discarded; the displayed text is unchanged.
    Rejected,
}

impl EditOutcome {
    /// `None` means no notification, `Some(v)` means notify with `v`.
    pub fn emission(&self) -> Option<Option<f64>> {
        match self {
            EditOutcome::Cleared => Some(None),
            EditOutcome::Changed(value) => Some(Some(*value)),
            EditOutcome::Intermediate | EditOutcome::Rejected => None,
        }
    }

    pub fn issue(&self) -> Option<FieldIssue> {
        match self {
            EditOutcome::Rejected => Some(FieldIssue::RejectedEdit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditResult {
    pub accepted_text: String,
    pub outcome: EditOutcome,
}

/// What a blur did to the field.
#[derive(Debug, Clone, PartialEq)]
pub enum FinalizeOutcome {
    /// Text canonicalised and the rounded value re-emitted.
    Formatted(f64),
    /// Text left untouched; it does not parse.
    Unparseable,
    /// Text left untouched; the value parses but breaks a rule.
    OutOfRange(f64, ConstraintViolation),
}

impl FinalizeOutcome {
    pub fn emission(&self) -> Option<Option<f64>> {
        match self {
            FinalizeOutcome::Formatted(value) => Some(Some(*value)),
            _ => None,
        }
    }

    pub fn issue(&self) -> Option<FieldIssue> {
        match self {
            FinalizeOutcome::Formatted(_) => None,
            FinalizeOutcome::Unparseable => Some(FieldIssue::UnparseableOnFinalize),
            FinalizeOutcome::OutOfRange(_, violation) => Some(FieldIssue::OutOfRange(*violation)),
        }
    }
}

/// Parse user text into a number the way a lenient float parser does.
///
/// Characters other than digits, `.` and `-` are dropped first, then the
/// longest leading numeric prefix is read. Returns `None` for empty or
/// non-finite results. The value is not rounded.
pub fn parse(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    let prefix = NUMERIC_PREFIX.find(&cleaned)?;
    prefix
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Round to `decimal_places` and render without insignificant zeros.
///
/// `123.456` at 2 places is `"123.46"`, `12.00` is `"12"`. Exact binary
/// ties round away from zero, so `2.5` at 0 places is `"3"`.
pub fn format_value(value: f64, decimal_places: u32) -> String {
    round_to(value, decimal_places).to_string()
}

// Widest fractional expansion an f64 can have (the smallest subnormal).
const EXACT_DIGITS: usize = 1074;

fn round_to(value: f64, decimal_places: u32) -> f64 {
    let places = decimal_places as usize;
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let kept = &fraction[..places.min(fraction.len())];
    let truncated_text = if kept.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{kept}")
    };
    let truncated = truncated_text.parse::<f64>().unwrap_or(value.abs());

    // The expansion is exact, so a first dropped digit of 5 or more means
    // the value sits at or past the midpoint.
    let magnitude = match fraction.as_bytes().get(places) {
        Some(digit) if *digit >= b'5' => truncated + 10f64.powi(-(decimal_places as i32)),
        _ => truncated,
    };
    let rounded = format!("{:.*}", places, magnitude)
        .parse::<f64>()
        .unwrap_or(magnitude)
        .copysign(value);
    // Normalise negative zero so "-0.001" at 2 places displays as "0".
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Per-input text entry state: raw text, committed value and rules.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldState {
    raw_text: String,
    committed_value: Option<f64>,
    constraints: NumericConstraints,
}

impl FieldState {
    /// Seed from an optional initial value. No rounding is applied until
    /// the first finalize.
    pub fn new(initial: Option<f64>, constraints: NumericConstraints) -> Self {
        let mut state = Self {
            raw_text: String::new(),
            committed_value: None,
            constraints,
        };
        state.sync_external(initial);
        state
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn committed_value(&self) -> Option<f64> {
        self.committed_value
    }

    pub fn constraints(&self) -> &NumericConstraints {
        &self.constraints
    }

    /// Replace the text with an externally supplied value.
    pub fn sync_external(&mut self, value: Option<f64>) {
        match value.filter(|v| v.is_finite()) {
            Some(value) => {
                self.raw_text = value.to_string();
                self.committed_value = Some(value);
            }
            None => {
                self.raw_text.clear();
                self.committed_value = None;
            }
        }
    }

    /// Whether a value handed back by the owner is just our own last value
    /// in the owner's storage form. That covers the committed value itself,
    /// or what the current text will finalize to when the owner rounds on
    /// store. An echo must not replace the text the user is typing.
    pub fn is_echo(&self, value: Option<f64>) -> bool {
        if value == self.committed_value {
            return true;
        }
        match (value, parse(&self.raw_text)) {
            (Some(incoming), Some(typed)) => {
                round_to(typed, self.constraints.decimal_places) == incoming
            }
            _ => false,
        }
    }

    pub fn validate(&self, value: f64) -> bool {
        self.constraints.validate(value)
    }

    /// Rule the committed value currently breaks, if any.
    pub fn violation(&self) -> Option<ConstraintViolation> {
        self.committed_value
            .and_then(|value| self.constraints.violation(value))
    }

    /// Apply a raw edit event. Rejected input leaves the state untouched.
    pub fn on_edit(&mut self, raw_input: &str) -> EditResult {
        let outcome = self.apply_edit(raw_input);
        match outcome {
            EditOutcome::Rejected => {
                tracing::debug!(input = raw_input, kept = %self.raw_text, "numeric edit rejected");
            }
            _ => tracing::trace!(input = raw_input, ?outcome, "numeric edit accepted"),
        }
        EditResult {
            accepted_text: self.raw_text.clone(),
            outcome,
        }
    }

    fn apply_edit(&mut self, raw_input: &str) -> EditOutcome {
        if raw_input.is_empty() {
            self.raw_text.clear();
            self.committed_value = None;
            return EditOutcome::Cleared;
        }

        if self.constraints.is_intermediate(raw_input) {
            self.raw_text = raw_input.to_string();
            return EditOutcome::Intermediate;
        }

        if !self.constraints.literal_pattern().is_match(raw_input) {
            return EditOutcome::Rejected;
        }

        // A literal too long to be finite cannot become a value; keep the
        // last good text instead of showing something unparseable.
        let Some(value) = parse(raw_input) else {
            return EditOutcome::Rejected;
        };

        self.raw_text = raw_input.to_string();
        self.committed_value = Some(value);
        EditOutcome::Changed(value)
    }

    /// Blur-time reconciliation. Only canonicalises text that parses and
    /// satisfies the constraints; never clamps.
    pub fn finalize(&mut self) -> FinalizeOutcome {
        let Some(parsed) = parse(&self.raw_text) else {
            tracing::debug!(text = %self.raw_text, "finalize left unparseable text");
            return FinalizeOutcome::Unparseable;
        };

        if let Some(violation) = self.constraints.violation(parsed) {
            tracing::debug!(value = parsed, %violation, "finalize left out-of-range value");
            return FinalizeOutcome::OutOfRange(parsed, violation);
        }

        let rounded = round_to(parsed, self.constraints.decimal_places);
        self.raw_text = rounded.to_string();
        self.committed_value = Some(rounded);
        tracing::debug!(value = rounded, text = %self.raw_text, "finalize formatted value");
        FinalizeOutcome::Formatted(rounded)
    }
}
