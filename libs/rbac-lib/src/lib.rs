pub mod admin_service;
pub mod backend;
pub mod editor;
pub mod entities;
pub mod errors_service;
pub mod permissions;
pub mod session;

pub use admin_service::*;
pub use editor::*;
pub use entities::*;
pub use errors_service::*;
pub use permissions::*;
pub use session::*;
