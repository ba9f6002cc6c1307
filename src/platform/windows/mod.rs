//! COM running object table, DTE automation objects and user32 windows.

mod com;
mod dispatch;
mod rot;
mod window;

pub use self::dispatch::DteInstance;
pub use self::rot::RotRegistry;
pub use self::window::User32;
