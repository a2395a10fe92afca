pub mod definitions;
pub mod error;
pub mod normalize;
pub mod phonetic;
pub mod preprocess;
pub mod section;
pub mod text;
pub mod translate;
pub mod wikitext;

pub use error::NormalizeError;
pub use normalize::{Normalizer, normalize};
