mod context;
mod finish;
mod merge;
mod nav;

pub use context::handle_context_command;
pub use finish::handle_finish_command;
pub use merge::handle_merge_command;
pub use nav::handle_nav_command;
