pub mod confirm_dialog;
pub mod header;
pub mod layout;
pub mod page;
pub mod protected_layout;

pub use confirm_dialog::{ConfirmDialog, DestructiveAction};
pub use header::Header;
pub use layout::Layout;
pub use page::{ErrorPage, LoadingPage, Page};
pub use protected_layout::{ProtectedLayout, RequiresLoggedIn};
