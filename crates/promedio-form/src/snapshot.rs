use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FormSnapshot {
    pub mean: Option<f64>,
    pub mean_text: String,
    pub rounded: Option<f64>,
    pub status_label: String,
    pub tone: String,
    pub confirmation: Option<String>,
    pub validation_error: Option<String>,
    pub rounding_note: Option<String>,
}
