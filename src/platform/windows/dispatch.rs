use anyhow::{Context, Result};
use windows::core::{BSTR, GUID, HSTRING, PCWSTR};
use windows::Win32::System::Com::{IDispatch, DISPATCH_METHOD, DISPATCH_PROPERTYGET, DISPPARAMS};
use windows::Win32::System::Variant::VARIANT;

use crate::registry::{LiveObject, NativeWindow};

const LOCALE_USER_DEFAULT: u32 = 0x0400;

/// A bound DTE automation object. Dropping it releases the reference.
#[derive(Debug)]
pub struct DteInstance {
    dte: IDispatch,
}

impl DteInstance {
    pub const fn new(dte: IDispatch) -> Self {
        Self { dte }
    }

    fn main_window(&self) -> Result<Option<IDispatch>> {
        get_object(&self.dte, "MainWindow")
    }
}

impl LiveObject for DteInstance {
    fn resource_path(&self) -> Result<Option<String>> {
        let Some(solution) = get_object(&self.dte, "Solution")? else {
            return Ok(None);
        };
        let name = get_string(&solution, "FullName")?;
        Ok(Some(name).filter(|n| !n.is_empty()))
    }

    fn activate_window(&self) -> Result<bool> {
        let Some(window) = self.main_window()? else {
            return Ok(false);
        };
        invoke(&window, "Activate")?;
        Ok(true)
    }

    fn main_window_handle(&self) -> Result<Option<NativeWindow>> {
        let Some(window) = self.main_window()? else {
            return Ok(None);
        };
        let raw = get_i32(&window, "HWnd")?;
        Ok(NativeWindow::new(isize::try_from(raw)?))
    }
}

fn dispid(object: &IDispatch, name: &str) -> Result<i32> {
    let wide = HSTRING::from(name);
    let names = [PCWSTR(wide.as_ptr())];
    let mut id = 0;
    unsafe {
        object.GetIDsOfNames(&GUID::zeroed(), names.as_ptr(), 1, LOCALE_USER_DEFAULT, &mut id)
    }
    .with_context(|| format!("no member named {name}"))?;
    Ok(id)
}

/// Read a property or call a parameterless method by name.
fn invoke(object: &IDispatch, name: &str) -> Result<VARIANT> {
    let id = dispid(object, name)?;
    let params = DISPPARAMS::default();
    let mut result = VARIANT::default();
    unsafe {
        object.Invoke(
            id,
            &GUID::zeroed(),
            LOCALE_USER_DEFAULT,
            DISPATCH_PROPERTYGET | DISPATCH_METHOD,
            &params,
            Some(&mut result as *mut _),
            None,
            None,
        )
    }
    .with_context(|| format!("invoking {name} failed"))?;
    Ok(result)
}

fn get_object(object: &IDispatch, name: &str) -> Result<Option<IDispatch>> {
    let value = invoke(object, name)?;
    if value.is_empty() {
        return Ok(None);
    }
    let dispatch = IDispatch::try_from(&value).with_context(|| format!("{name} is not an object"))?;
    Ok(Some(dispatch))
}

fn get_string(object: &IDispatch, name: &str) -> Result<String> {
    let value = invoke(object, name)?;
    if value.is_empty() {
        return Ok(String::new());
    }
    let text = BSTR::try_from(&value).with_context(|| format!("{name} is not a string"))?;
    Ok(text.to_string())
}

fn get_i32(object: &IDispatch, name: &str) -> Result<i32> {
    let value = invoke(object, name)?;
    i32::try_from(&value).with_context(|| format!("{name} is not an integer"))
}
