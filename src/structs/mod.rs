pub mod abbreviation;
pub mod audio_format;
pub mod credit;
pub mod lexicon;
pub mod request;
pub mod speak;
pub mod voice;
