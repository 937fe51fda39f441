//! The `tiltChange` notification
//!
//! Dispatched on the tilted element after every frame. The detail is a
//! plain object `{ tiltX, tiltY, percentageX, percentageY, angle }` so
//! hand-written page scripts can consume it as well.

use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, CustomEventInit, Event, EventTarget};

use super::error::{TiltError, reason};
use crate::tilt::TiltResult;

pub const TILT_CHANGE_EVENT: &str = "tiltChange";

/// Payload keys in detail order
pub fn payload_fields(result: &TiltResult) -> [(&'static str, f64); 5] {
    [
        ("tiltX", result.tilt_x),
        ("tiltY", result.tilt_y),
        ("percentageX", result.percentage_x),
        ("percentageY", result.percentage_y),
        ("angle", result.angle),
    ]
}

/// Rebuild a result from a payload lookup. Missing or non-numeric keys
/// mean the detail did not come from this crate.
pub fn from_payload<F>(field: F) -> Option<TiltResult>
where
    F: Fn(&str) -> Option<f64>,
{
    Some(TiltResult {
        tilt_x: field("tiltX")?,
        tilt_y: field("tiltY")?,
        percentage_x: field("percentageX")?,
        percentage_y: field("percentageY")?,
        angle: field("angle")?,
    })
}

pub fn dispatch_tilt_change(target: &EventTarget, result: &TiltResult) -> Result<(), TiltError> {
    let failed = |e: JsValue| TiltError::Dispatch {
        event: TILT_CHANGE_EVENT,
        reason: reason(&e),
    };

    let detail = Object::new();
    for (key, value) in payload_fields(result) {
        let stored = Reflect::set(&detail, &JsValue::from_str(key), &JsValue::from_f64(value)).map_err(failed)?;
        require_stored(key, stored)?;
    }

    let init = CustomEventInit::new();
    init.set_detail(&detail);
    let event = CustomEvent::new_with_event_init_dict(TILT_CHANGE_EVENT, &init).map_err(failed)?;
    let _ = target.dispatch_event(&event).map_err(failed)?;
    Ok(())
}

/// `Reflect::set` reports a refused write as `Ok(false)`
fn require_stored(key: &str, stored: bool) -> Result<(), TiltError> {
    if stored {
        return Ok(());
    }
    Err(TiltError::Dispatch {
        event: TILT_CHANGE_EVENT,
        reason: format!("detail rejected key `{key}`"),
    })
}

/// Decode a `tiltChange` event back into a result
pub fn decode(event: &Event) -> Option<TiltResult> {
    let detail = event.dyn_ref::<CustomEvent>()?.detail();
    from_payload(|key| Reflect::get(&detail, &JsValue::from_str(key)).ok()?.as_f64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn sample() -> TiltResult {
        TiltResult {
            tilt_x: 3.25,
            tilt_y: -1.5,
            percentage_x: 40.0,
            percentage_y: 71.0,
            angle: 12.0,
        }
    }

    #[test]
    fn payload_uses_camel_case_keys() {
        let keys: Vec<&str> = payload_fields(&sample()).iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["tiltX", "tiltY", "percentageX", "percentageY", "angle"]);
    }

    #[test]
    fn payload_lookup_rebuilds_result() {
        let map: HashMap<&str, f64> = payload_fields(&sample()).into_iter().collect();
        let decoded = from_payload(|k| map.get(k).copied());
        assert_eq!(decoded, Some(sample()));
    }

    #[test]
    fn refused_detail_write_fails_dispatch() {
        assert!(require_stored("tiltX", true).is_ok());
        let err = require_stored("angle", false).unwrap_err();
        assert!(matches!(err, TiltError::Dispatch { event: "tiltChange", .. }));
        assert_eq!(err.to_string(), "dispatching `tiltChange` failed: detail rejected key `angle`");
    }

    #[test]
    fn missing_key_is_rejected() {
        let mut map: HashMap<&str, f64> = payload_fields(&sample()).into_iter().collect();
        let _ = map.remove("angle");
        assert_eq!(from_payload(|k| map.get(k).copied()), None);
    }
}
