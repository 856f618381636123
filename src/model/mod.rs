pub mod params;
pub mod scores;
pub mod vocabulary;
