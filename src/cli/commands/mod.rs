pub mod hints;
pub mod hover;
pub mod init;
pub mod languages;
