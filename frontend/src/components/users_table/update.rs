//! Update function for the users table component.
//!
//! Elm-style: receives the current state, the `Context`, and a `Msg`,
//! mutates the state accordingly, and returns whether the view should
//! re-render.
//!
//! Key behaviors
//! - `LoadRequested` flips the loading flag synchronously, then fetches the
//!   fixed users resource in a spawned task.
//! - `RecordsLoaded` replaces the record set, clears the flag, and exposes
//!   the data on `window.data` for devtools inspection.
//! - Failures are only logged to the console; the loading flag stays set
//!   and the table stays hidden. There is no retry and no error UI.
//! - Overlapping loads are not guarded; the last `RecordsLoaded` wins.

use gloo_console::error;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::record::RecordSet;

use super::helpers::publish_debug_data;
use super::messages::Msg;
use super::state::UsersTableComponent;

/// The fixed resource behind "Daten laden". No parameters, no pagination.
const USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

pub fn update(
    component: &mut UsersTableComponent,
    ctx: &Context<UsersTableComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::LoadRequested => {
            // Set before the task is spawned so the indicator is visible
            // for the whole round trip.
            component.loading = true;

            let link = ctx.link().clone();
            spawn_local(async move {
                match Request::get(USERS_ENDPOINT).send().await {
                    Ok(response) => match response.json::<RecordSet>().await {
                        Ok(records) => link.send_message(Msg::RecordsLoaded(records)),
                        Err(err) => error!(format!("Antwort nicht lesbar: {err}")),
                    },
                    Err(err) => error!(format!("Laden fehlgeschlagen: {err}")),
                }
            });
            true
        }
        Msg::RecordsLoaded(records) => {
            component.records = records;
            component.loading = false;
            if !component.records.is_empty() {
                publish_debug_data(&component.records);
            }
            true
        }
    }
}
