use std::ffi::c_void;

use anyhow::{bail, Result};
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{SetForegroundWindow, ShowWindowAsync, SW_RESTORE};

use crate::registry::{NativeWindow, WindowSystem};

/// Top-level windows through user32.
#[derive(Debug, Default)]
pub struct User32;

fn hwnd(window: NativeWindow) -> HWND {
    HWND(window.get() as *mut c_void)
}

impl WindowSystem for User32 {
    fn restore(&self, window: NativeWindow) -> Result<()> {
        // The return value is the previous visibility, not success.
        let _ = unsafe { ShowWindowAsync(hwnd(window), SW_RESTORE) };
        Ok(())
    }

    fn bring_to_front(&self, window: NativeWindow) -> Result<()> {
        if unsafe { SetForegroundWindow(hwnd(window)) }.as_bool() {
            Ok(())
        } else {
            bail!("the window manager refused to foreground window {:#x}", window.get())
        }
    }
}
