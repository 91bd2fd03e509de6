//! Application services for the administrative panel.

pub mod panel;
pub mod state;
pub mod toast;

pub use panel::{AdminPanelController, AdminPanelError, SubmitError, TabPage};
pub use state::{Modal, PanelState};
pub use toast::{Toast, ToastKind};
