pub mod classification;
pub mod documents;
