#![deny(clippy::all)]

use napi::{ bindgen_prelude::*, Error, Status };
use napi_derive::*;
use touchfile::TouchError;

use crate::task::AsyncTouchTask;

extern crate napi_derive;

pub mod task;

#[napi]
#[derive(PartialEq)]
pub enum TouchOutcome {
    Touched = 0,
    Created = 1,
}

impl From<touchfile::TouchOutcome> for TouchOutcome {
    fn from(outcome: touchfile::TouchOutcome) -> Self {
        match outcome {
            touchfile::TouchOutcome::Touched => TouchOutcome::Touched,
            touchfile::TouchOutcome::Created => TouchOutcome::Created,
        }
    }
}

#[napi]
pub enum TouchStrategy {
    SetTimes,
    AppendTruncate,
}

impl From<TouchStrategy> for touchfile::TouchStrategy {
    fn from(strategy: TouchStrategy) -> Self {
        match strategy {
            TouchStrategy::SetTimes => touchfile::TouchStrategy::SetTimes,
            TouchStrategy::AppendTruncate => touchfile::TouchStrategy::AppendTruncate,
        }
    }
}

#[napi(object)]
pub struct TouchOptions {
    pub strategy: Option<TouchStrategy>,
}

/// Numeric result of a touch: `0` touched, `1` created, `-1` failed with `message`.
#[napi(object)]
pub struct TouchStatus {
    pub code: i32,
    pub message: Option<String>,
}

pub(crate) fn strategy_of(options: Option<TouchOptions>) -> touchfile::TouchStrategy {
    options
        .and_then(|options| options.strategy)
        .map(Into::into)
        .unwrap_or_default()
}

pub(crate) fn to_napi_error(err: TouchError) -> Error {
    Error::new(Status::GenericFailure, err.to_string())
}

#[napi]
pub fn touch_file(path: String, options: Option<TouchOptions>) -> Result<TouchOutcome> {
    touchfile::touch_file_with(&path, strategy_of(options))
        .map(TouchOutcome::from)
        .map_err(to_napi_error)
}

#[napi(ts_return_type = "Promise<TouchOutcome>")]
pub fn touch_file_async(path: String, options: Option<TouchOptions>) -> AsyncTask<AsyncTouchTask> {
    AsyncTask::new(AsyncTouchTask {
        path,
        strategy: strategy_of(options),
    })
}

#[napi]
pub fn touch_file_status(path: String, options: Option<TouchOptions>) -> TouchStatus {
    match touchfile::touch_file_with(&path, strategy_of(options)) {
        Ok(outcome) => TouchStatus { code: outcome.code(), message: None },
        Err(err) => TouchStatus { code: err.code(), message: Some(err.to_string()) },
    }
}

#[napi]
pub fn is_file(path: String) -> bool {
    touchfile::is_file(&path)
}
