//! Domain logic - version declarations and publish steps, independent of git

pub mod declaration;
pub mod step;

pub use declaration::{DeclarationStyle, Substitution, VERSION_PLACEHOLDER};
pub use step::PublishStep;
