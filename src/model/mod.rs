pub mod choices;
pub mod course;
pub mod entry;
pub mod form;
pub mod navigator;

pub use choices::*;
pub use course::*;
pub use entry::*;
pub use form::*;
pub use navigator::*;
