pub mod types;

pub use types::{DefinitionItem, DictionaryEntry, PartOfSpeechGroup, SourceKind};
