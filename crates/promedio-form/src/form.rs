use promedio_core::{
    evaluate_scores, explain_rounding, score_text_in_range, Evaluation, RoundingOutcome, ScoreSet,
    StatusBand, StatusTone,
};
use promedio_storage::{AverageStore, InMemoryAverageStore};

use crate::error::FormError;
use crate::policy::FormPolicy;
use crate::snapshot::FormSnapshot;

pub const STATUS_PROMPT: &str = "enter the scores";
pub const FIELD_RANGE_MESSAGE: &str = "must be between 0 and 20";
pub const NOTHING_ROUNDED_MESSAGE: &str = "nothing rounded yet";

pub struct ScoreForm {
    policy: FormPolicy,
    store: Box<dyn AverageStore>,
    mean: Option<f64>,
    band: Option<StatusBand>,
    rounding: Option<RoundingOutcome>,
    confirmation: Option<String>,
    validation_error: Option<String>,
    rounding_note: Option<String>,
    listeners: Vec<Box<dyn Fn(&FormSnapshot)>>,
}

impl ScoreForm {
    pub fn new() -> Self {
        Self::with(FormPolicy::default(), Box::new(InMemoryAverageStore::new()))
    }

    pub fn with(policy: FormPolicy, store: Box<dyn AverageStore>) -> Self {
        Self {
            policy,
            store,
            mean: None,
            band: None,
            rounding: None,
            confirmation: None,
            validation_error: None,
            rounding_note: None,
            listeners: Vec::new(),
        }
    }

    pub fn evaluate(
        &mut self,
        first: f64,
        second: f64,
        third: f64,
    ) -> Result<Evaluation, FormError> {
        let set = ScoreSet::new(first, second, third);
        if self.policy.require_any_entry && !set.has_any_entry() {
            return Err(self.reject(FormError::NoScoresEntered));
        }
        let Some(result) = evaluate_scores(&set) else {
            return Err(self.reject(FormError::OutOfRange));
        };

        self.mean = Some(result.mean);
        self.band = Some(result.band);
        self.rounding = None;
        self.rounding_note = None;
        self.confirmation = Some(self.store.save(result.mean));
        self.validation_error = None;
        tracing::debug!(mean = result.mean, band = result.band.label(), "scores evaluated");
        self.notify();
        Ok(result)
    }

    pub fn round(&mut self) -> Result<RoundingOutcome, FormError> {
        let Some(mean) = self.mean else {
            let err = FormError::NothingToRound;
            self.rounding_note = Some(err.to_string());
            tracing::warn!(error = %err, "rounding rejected");
            self.notify();
            return Err(err);
        };

        let outcome = explain_rounding(mean);
        self.rounding = Some(outcome);
        self.rounding_note = Some(outcome.describe());
        tracing::debug!(rounded = outcome.rounded, "mean rounded");
        self.notify();
        Ok(outcome)
    }

    pub fn reset(&mut self) {
        self.mean = None;
        self.band = None;
        self.rounding = None;
        self.confirmation = None;
        self.validation_error = None;
        self.rounding_note = None;
        tracing::debug!("form cleared");
        self.notify();
    }

    pub fn validate_single(&self, text: &str) -> bool {
        score_text_in_range(text)
    }

    pub fn describe_rounding(&self) -> String {
        match (self.mean, self.rounding) {
            (Some(_), Some(outcome)) => outcome.describe(),
            _ => NOTHING_ROUNDED_MESSAGE.to_string(),
        }
    }

    pub fn mean(&self) -> Option<f64> {
        self.mean
    }

    pub fn band(&self) -> Option<StatusBand> {
        self.band
    }

    pub fn rounded(&self) -> Option<f64> {
        self.rounding.map(|r| r.rounded)
    }

    pub fn take_confirmation(&mut self) -> Option<String> {
        self.confirmation.take()
    }

    pub fn take_validation_error(&mut self) -> Option<String> {
        self.validation_error.take()
    }

    pub fn take_rounding_note(&mut self) -> Option<String> {
        self.rounding_note.take()
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            mean: self.mean,
            mean_text: format!("{:.2}", self.mean.unwrap_or(0.0)),
            rounded: self.rounding.map(|r| r.rounded),
            status_label: self
                .band
                .map_or_else(|| STATUS_PROMPT.to_string(), |b| b.label().to_string()),
            tone: self
                .band
                .map_or(StatusTone::Alert, StatusBand::tone)
                .as_str()
                .to_string(),
            confirmation: self.confirmation.clone(),
            validation_error: self.validation_error.clone(),
            rounding_note: self.rounding_note.clone(),
        }
    }

    pub fn on_change(&mut self, listener: impl Fn(&FormSnapshot) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn reject(&mut self, err: FormError) -> FormError {
        self.validation_error = Some(err.to_string());
        tracing::warn!(error = %err, "evaluation rejected");
        self.notify();
        err
    }

    fn notify(&self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for listener in &self.listeners {
            listener(&snapshot);
        }
    }
}

impl Default for ScoreForm {
    fn default() -> Self {
        Self::new()
    }
}
