use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{
    Error as GenericJsError, RangeError as JsRangeError, SyntaxError as JsSyntaxError,
    TypeError as JsTypeError,
};

/// A `JsValue` rejection sorted into the concrete js-sys error type it
/// actually is, so logs say more than `JsValue(Object)`.
#[derive(Debug, Clone, Error)]
pub enum JsError {
    #[error("GenericJs Error: {0:?}")]
    GenericJs(GenericJsError),
    #[error("JsRange Error: {0:?}")]
    JsRange(JsRangeError),
    #[error("JsSyntax Error: {0:?}")]
    JsSyntax(JsSyntaxError),
    #[error("JsType Error: {0:?}")]
    JsType(JsTypeError),
    #[error("UnknownJsValue Error: {0:?}")]
    UnknownJsValue(String),
}

impl From<JsValue> for JsError {
    fn from(err: JsValue) -> JsError {
        if err.is_instance_of::<JsRangeError>() {
            return JsError::JsRange(err.into());
        }
        if err.is_instance_of::<JsSyntaxError>() {
            return JsError::JsSyntax(err.into());
        }
        if err.is_instance_of::<JsTypeError>() {
            return JsError::JsType(err.into());
        }
        if err.is_instance_of::<GenericJsError>() {
            return JsError::GenericJs(err.into());
        }
        JsError::UnknownJsValue(format!("{:?}", err))
    }
}

/// A classified rejection plus where in the handler it happened.
/// Converting back to a `JsValue` rejects the promise the event is
/// waiting on.
#[derive(Debug, Clone, Error)]
#[error("{context}: {inner}")]
pub struct WorkerError {
    pub context: String,
    pub inner: JsError,
}

impl WorkerError {
    pub fn new(context: impl Into<String>, value: JsValue) -> Self {
        Self {
            context: context.into(),
            inner: JsError::from(value),
        }
    }
}

impl From<WorkerError> for JsValue {
    fn from(err: WorkerError) -> JsValue {
        JsValue::from(err.to_string())
    }
}
