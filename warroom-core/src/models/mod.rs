mod calendar;
mod chat;
mod contact;
mod kpi;
mod lead;
mod memory;
mod metadata;
mod sticky_note;
mod supersal;
mod system;
mod task;
mod user;
mod workflow;

pub use calendar::*;
pub use chat::*;
pub use contact::*;
pub use kpi::*;
pub use lead::*;
pub use memory::*;
pub use metadata::*;
pub use sticky_note::*;
pub use supersal::*;
pub use system::*;
pub use task::*;
pub use user::*;
pub use workflow::*;
