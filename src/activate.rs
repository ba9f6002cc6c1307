use tracing::{debug, info, warn};

use crate::registry::{LiveObject, WindowSystem};


/// Bring a matched instance's main window to the front, best effort.
///
/// Steps: activate the main window through the instance, then, if it exposes
/// a native handle, restore and foreground it through the window system. A
/// missing capability skips its step; a failing step is logged and the next
/// one still runs. A reuse is a success even if nothing here works.
pub fn activate<O: LiveObject, W: WindowSystem>(object: &O, windows: &W) {
    match object.activate_window() {
        Ok(true) => debug!("main window activated"),
        Ok(false) => {
            info!("instance exposes no main window; nothing to activate");
            return;
        }
        Err(err) => warn!(error = %format!("{err:#}"), "could not activate main window"),
    }

    let window = match object.main_window_handle() {
        Ok(Some(window)) => window,
        Ok(None) => {
            debug!("main window handle is absent; skipping restore and foreground");
            return;
        }
        Err(err) => {
            warn!(error = %format!("{err:#}"), "could not read main window handle");
            return;
        }
    };

    debug!(hwnd = window.get(), "bringing main window to front");
    if let Err(err) = windows.restore(window) {
        warn!(hwnd = window.get(), error = %format!("{err:#}"), "restore failed");
    }
    if let Err(err) = windows.bring_to_front(window) {
        warn!(hwnd = window.get(), error = %format!("{err:#}"), "foreground request failed");
    }
}
