use assist_engine::PageContext;
use serde::Serialize;

/// JSON envelope for a single `ask` resolution.
#[derive(Debug, Serialize)]
pub struct AskOutput {
    pub page: PageContext,
    pub question: String,
    pub answer: &'static str,
}

#[derive(Debug, Serialize)]
pub struct QuickEntry {
    pub question: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<&'static str>,
}

/// JSON envelope for the `quick` listing.
#[derive(Debug, Serialize)]
pub struct QuickOutput {
    pub page: PageContext,
    pub questions: Vec<QuickEntry>,
}
