use std::ffi::CString;
use std::os::raw::{c_char, c_longlong};
use std::ptr;

use serde_json;

use crate::api::simulate;

/// Run a simulation, returning its results as a JSON string
///
/// Returns a null pointer when the simulation fails. The string must be
/// released with `tala_free`.
#[no_mangle]
pub extern "C" fn tala_simulate(
    steps: c_longlong,
    pulses: c_longlong,
    rotation: c_longlong,
    beats: c_longlong,
) -> *mut c_char {
    let sim = match simulate(steps, pulses, rotation, beats) {
        Ok(sim) => sim,
        Err(_) => return ptr::null_mut(),
    };

    let out = serde_json::to_string(&sim).unwrap();
    let out = CString::new(out).unwrap();
    out.into_raw()
}

/// Release a string returned by `tala_simulate`
#[no_mangle]
pub extern "C" fn tala_free(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }
    unsafe {
        CString::from_raw(ptr);
    }
}
