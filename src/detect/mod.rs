// Language identification — trait seam plus the whatlang implementation.

pub mod traits;
pub mod whatlang;

pub use traits::LanguageDetector;
pub use whatlang::WhatlangDetector;
