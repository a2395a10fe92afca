use tudien_types::SourceKind;

#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    /// The payload does not match the shape required by its declared source.
    #[error("payload does not match the {kind} shape: {detail}")]
    MalformedPayload { kind: SourceKind, detail: String },

    /// No sense groups exist for the requested language key.
    /// A terminal, expected outcome, not a parse failure.
    #[error("no sense groups for language '{language}'")]
    NoStructuredData { language: String },
}
