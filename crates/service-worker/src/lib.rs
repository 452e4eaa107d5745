use console_error_panic_hook::set_once as set_panic_hook;
use gloo::utils::format::JsValueSerdeExt;
use shared::{
    error::WorkerError,
    payload::PushPayload,
    routing::{click_action, ClickAction},
    utils::tracing::configure_tracing_once as configure_tracing,
};
use tracing::debug;
use wasm_bindgen::{prelude::wasm_bindgen, JsValue};
use wasm_bindgen_futures::{future_to_promise, JsFuture};
use web_sys::{
    console::error_1,
    js_sys::{Array, Promise},
    ClientQueryOptions, ClientType, FetchEvent, NotificationEvent, NotificationOptions, PushEvent,
    Request, ServiceWorkerGlobalScope, WindowClient,
};

/// Matches the first argument as a result. If there is an error it is
/// classified as a [`WorkerError`], logged, and returned as the JsValue
/// that rejects the promise the event is waiting on. The remaining
/// arguments are passed to format_args!() to name the failing seam.
macro_rules! log_js_err {
    ($f:expr, $($t:tt)*) => {
        match $f {
            Ok(v) => Ok(v),
            Err(e) => {
                let e = WorkerError::new(format_args!($($t)*).to_string(), e);

                // Log via tracing and in the raw browser console
                tracing::error!("{e}");
                error_1(&JsValue::from(e.to_string()));

                Err(JsValue::from(e))
            }
        }
    };
}

/// Any exported entry point can be the first code to run after the
/// browser recycles the worker, so each one re-arms the panic hook and
/// the console subscriber
fn bootstrap() {
    set_panic_hook();
    configure_tracing();
}

async fn install(sw: ServiceWorkerGlobalScope) -> Result<JsValue, JsValue> {
    debug!("install: requesting immediate activation");

    // MDN states the promise returned by skipWaiting can be safely ignored
    let _ = log_js_err!(sw.skip_waiting(), "sw::skip_waiting",)?;

    Ok(JsValue::undefined())
}

#[wasm_bindgen]
pub fn worker_install(sw: ServiceWorkerGlobalScope) -> Promise {
    bootstrap();

    future_to_promise(install(sw))
}

async fn activate(sw: ServiceWorkerGlobalScope) -> Result<JsValue, JsValue> {
    // Claim pages that were already open before this version activated so
    // a notification click can focus them without a reload
    log_js_err!(
        JsFuture::from(sw.clients().claim()).await,
        "sw::clients::claim",
    )?;
    debug!("activate: clients claimed");

    Ok(JsValue::undefined())
}

#[wasm_bindgen]
pub fn worker_activate(sw: ServiceWorkerGlobalScope) -> Promise {
    bootstrap();

    future_to_promise(activate(sw))
}

/// Deliberate no-op passthrough: the request goes to the network exactly
/// as issued and the response comes back unmodified. A rejection here
/// rejects the respondWith promise, which is the browser's normal fetch
/// failure path, so it is neither caught nor logged.
async fn passthrough(
    sw: ServiceWorkerGlobalScope,
    request: Request,
) -> Result<JsValue, JsValue> {
    debug!("fetch: {} {}", request.method(), request.url());

    JsFuture::from(sw.fetch_with_request(&request)).await
}

#[wasm_bindgen]
pub fn worker_fetch(sw: ServiceWorkerGlobalScope, event: FetchEvent) -> Result<(), JsValue> {
    bootstrap();

    let response = future_to_promise(passthrough(sw, event.request()));
    event.respond_with(&response)?;

    Ok(())
}

async fn push(sw: ServiceWorkerGlobalScope, event: PushEvent) -> Result<JsValue, JsValue> {
    // A push with no data, or data that isn't the expected JSON object,
    // still produces a notification built from the defaults
    let payload: PushPayload = event
        .data()
        .and_then(|data| data.json().ok())
        .and_then(|json| JsValueSerdeExt::into_serde(&json).ok())
        .unwrap_or_default();

    let content = payload.resolve();
    debug!("push: showing \"{}\"", content.title);

    let mut options = NotificationOptions::new();
    options.body(&content.body);
    options.icon(content.icon);

    let shown = log_js_err!(
        sw.registration()
            .show_notification_with_options(&content.title, &options),
        "registration::show_notification",
    )?;

    log_js_err!(JsFuture::from(shown).await, "registration::show_notification",)
}

#[wasm_bindgen]
pub fn worker_push(sw: ServiceWorkerGlobalScope, event: PushEvent) -> Promise {
    bootstrap();

    future_to_promise(push(sw, event))
}

async fn notification_click(
    sw: ServiceWorkerGlobalScope,
    event: NotificationEvent,
) -> Result<JsValue, JsValue> {
    // Close the notification (chrome doesn't do this by itself)
    event.notification().close();

    // Uncontrolled windows count too, a tab opened before this worker
    // activated is still worth focusing
    let mut query = ClientQueryOptions::new();
    query.include_uncontrolled(true);
    query.type_(ClientType::Window);

    let clients: Array = log_js_err!(
        JsFuture::from(sw.clients().match_all_with_options(&query)).await,
        "sw::clients::match_all",
    )?
    .into();

    let urls = clients.iter().map(|client| WindowClient::from(client).url());

    match click_action(urls) {
        ClickAction::Focus(index) => {
            let client: WindowClient = clients.get(index as u32).into();
            debug!("click: focusing {}", client.url());

            let focused = log_js_err!(client.focus(), "client::focus",)?;
            log_js_err!(JsFuture::from(focused).await, "client::focus",)
        }
        ClickAction::Open(path) => {
            debug!("click: opening {path}");

            // Broken in firefox android and it doesn't seem to be being
            // worked on <https://bugzilla.mozilla.org/show_bug.cgi?id=1717431>
            log_js_err!(
                JsFuture::from(sw.clients().open_window(path)).await,
                "sw::clients::open_window",
            )
        }
    }
}

#[wasm_bindgen]
pub fn worker_notification_click(
    sw: ServiceWorkerGlobalScope,
    event: NotificationEvent,
) -> Promise {
    bootstrap();

    future_to_promise(notification_click(sw, event))
}
