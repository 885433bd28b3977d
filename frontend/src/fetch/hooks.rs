use std::cell::Cell;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use yew::prelude::*;

use super::collection::{commit_while_alive, fetch_collection, FetchState};
use super::endpoints::Endpoint;
use super::retry::RetryPolicy;
use super::transport::{BrowserTransport, TimerSleeper};
use crate::config;

/// Fetch a collection once per mount.
///
/// The result is only committed while the component is still mounted; a
/// response that lands after unmount is dropped.
#[hook]
pub fn use_collection<R, T>(endpoint: Endpoint, map: fn(R) -> T) -> FetchState<T>
where
    R: DeserializeOwned + 'static,
    T: Clone + PartialEq + 'static,
{
    let state = use_state(FetchState::<T>::loading);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |endpoint| {
                let alive = Rc::new(Cell::new(true));
                let endpoint = *endpoint;
                {
                    let alive = alive.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        commit_while_alive(
                            &alive,
                            endpoint.label,
                            fetch_collection(
                                &BrowserTransport,
                                &TimerSleeper,
                                &RetryPolicy::default(),
                                config::get_backend_url(),
                                &endpoint,
                                map,
                            ),
                            |next| state.set(next),
                        )
                        .await;
                    });
                }
                move || alive.set(false)
            },
            endpoint,
        );
    }

    (*state).clone()
}
