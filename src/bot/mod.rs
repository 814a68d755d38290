/// Typed decoding of reply keyboard text and callback data
pub mod actions;
/// Per-feature command handlers
pub mod commands;
/// Shared handler dependencies
pub mod context;
/// Update routing
pub mod handlers;
/// Reply and inline keyboards
pub mod keyboards;
