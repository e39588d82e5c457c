pub mod player;
pub mod url;

pub use crate::domain::model::{Action, DispatchOutcome, PlayRequest};
pub use crate::domain::ports::{ConfigProvider, Dispatcher};
pub use crate::utils::error::Result;
