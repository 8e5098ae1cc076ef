pub mod command;
pub mod config;
pub mod endpoints;
pub mod render;
pub mod types;
pub mod view;

pub use command::{Command, Domain, Endpoint, ParseCommandError};
pub use config::PanelConfig;
pub use endpoints::*;
pub use render::{render, render_failure};
pub use types::{AcMode, AcStatus, FanLevel, Reading};
pub use view::{AcTargets, Input, MemoryView, Target, View};
