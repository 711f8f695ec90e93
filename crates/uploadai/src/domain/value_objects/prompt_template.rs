//! PromptTemplate - Transcription substitution

/// Literal token replaced by a video's transcription
pub const TRANSCRIPTION_PLACEHOLDER: &str = "{transcription}";

/// A template that receives a transcription at completion time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate(String);

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// Substitute the first placeholder occurrence.
    ///
    /// Later occurrences are left as-is, and a template without the
    /// placeholder renders unchanged.
    pub fn render(&self, transcription: &str) -> String {
        self.0.replacen(TRANSCRIPTION_PLACEHOLDER, transcription, 1)
    }
}
