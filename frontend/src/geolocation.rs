use std::{cell::RefCell, rc::Rc};

use futures::channel::oneshot;
use gloo_utils::window;
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::Position as GeolocationPosition;
use workout_tracker_lib::workout::Coords;

type Reply = Rc<RefCell<Option<oneshot::Sender<Result<Coords, String>>>>>;

/// Asks the browser for the current position once.
pub async fn current_position() -> Result<Coords, String> {
    let geolocation = window()
        .navigator()
        .geolocation()
        .map_err(|err| format!("Geolocation unavailable: {err:?}"))?;

    let (tx, rx) = oneshot::channel();
    let reply: Reply = Rc::new(RefCell::new(Some(tx)));

    let on_success = {
        let reply = reply.clone();
        Closure::<dyn FnMut(GeolocationPosition)>::new(move |position: GeolocationPosition| {
            let coords = position.coords();
            send(&reply, Ok(Coords(coords.latitude(), coords.longitude())));
        })
    };
    let on_error = {
        let reply = reply.clone();
        Closure::<dyn FnMut(JsValue)>::new(move |err: JsValue| {
            send(&reply, Err(format!("{err:?}")));
        })
    };

    geolocation
        .get_current_position_with_error_callback(on_success.as_ref().unchecked_ref(), Some(on_error.as_ref().unchecked_ref()))
        .map_err(|err| format!("{err:?}"))?;

    // The closures have to outlive the request.
    let result = rx.await.unwrap_or_else(|_| Err("Position request dropped".into()));
    drop((on_success, on_error));
    result
}

fn send(reply: &Reply, result: Result<Coords, String>) {
    if let Some(tx) = reply.borrow_mut().take() {
        let _ = tx.send(result);
    }
}
