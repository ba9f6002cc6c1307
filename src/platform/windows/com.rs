use tracing::debug;
use windows::Win32::System::Com::{CoInitializeEx, CoUninitialize, COINIT_APARTMENTTHREADED};

/// Single-threaded COM apartment for the current thread. Uninitializes on
/// drop only if this guard initialized it.
#[derive(Debug)]
pub struct Apartment {
    owned: bool,
}

impl Apartment {
    pub fn enter() -> Self {
        let hr = unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED) };
        if hr.is_err() {
            // Already initialized with another model; COM is still usable.
            debug!(hresult = ?hr, "COM apartment already initialized");
        }
        Self { owned: hr.is_ok() }
    }
}

impl Drop for Apartment {
    fn drop(&mut self) {
        if self.owned {
            unsafe { CoUninitialize() };
        }
    }
}
