mod config;
mod hints;
mod hover;
