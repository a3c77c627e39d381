use napi::{ Env, Result, Task };
use touchfile::TouchStrategy;

use crate::{ to_napi_error, TouchOutcome };

pub struct AsyncTouchTask {
    pub path: String,
    pub strategy: TouchStrategy,
}

impl Task for AsyncTouchTask {
    type Output = touchfile::TouchOutcome;
    type JsValue = TouchOutcome;

    fn compute(&mut self) -> Result<Self::Output> {
        touchfile::touch_file_with(&self.path, self.strategy).map_err(to_napi_error)
    }

    fn resolve(&mut self, _env: Env, output: Self::Output) -> Result<Self::JsValue> {
        Ok(output.into())
    }
}
