//! Virtual desktop window management.
//!
//! [`window::WindowManager`] keeps the registry of open windows, the active
//! selection and the taskbar icons, and routes pointer input. Each
//! [`window::ManagedWindow`] owns its geometry and display mode and runs the
//! drag / resize / snap / maximize / minimize / restore / close state
//! machine. Every visual side effect goes through a
//! [`surface::PresentationSurface`].

pub mod animation;
pub mod clipboard;
pub mod config;
pub mod constants;
pub mod content;
pub mod drivers;
pub mod event_loop;
pub mod layout;
pub mod panel;
pub mod pointer;
pub mod render;
pub mod surface;
pub mod tracing_sub;
pub mod window;
