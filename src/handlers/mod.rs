pub mod answers;
pub mod assets;
pub mod contributions;
pub mod goals;
pub mod portfolio;
pub mod questions;
pub mod suggestions;
