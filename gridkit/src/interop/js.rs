use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::error::InteropError;

use super::GridInterop;

pub const GET_SCROLL_BAR_WIDTH: &str = "MaterialBlazor.MBGrid.getScrollBarWidth";
pub const GET_TEXT_WIDTHS: &str = "MaterialBlazor.MBGrid.getTextWidths";
pub const SCROLL_TO_INDICATED_ROW: &str = "MaterialBlazor.MBGrid.scrollToIndicatedRow";
pub const SYNC_SCROLL_BY_ID: &str = "MaterialBlazor.MBGrid.syncScrollByID";

/// Something that can call a named script function with JSON arguments.
#[async_trait]
pub trait JsRuntime: Send + Sync {
    async fn invoke(&self, identifier: &str, args: Vec<Value>) -> Result<Value, InteropError>;
}

/// [`GridInterop`] over a script runtime.
pub struct JsGridInterop<R> {
    runtime: R,
}

impl<R: JsRuntime> JsGridInterop<R> {
    pub fn new(runtime: R) -> Self {
        Self { runtime }
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    async fn call<T: DeserializeOwned>(&self, identifier: &str, args: Vec<Value>) -> Result<T, InteropError> {
        log::trace!("interop call {identifier}");
        let value = self.runtime.invoke(identifier, args).await?;
        serde_json::from_value(value).map_err(|e| InteropError::Decode {
            identifier: identifier.to_string(),
            message: e.to_string(),
        })
    }

    async fn call_void(&self, identifier: &str, args: Vec<Value>) -> Result<(), InteropError> {
        log::trace!("interop call {identifier}");
        self.runtime.invoke(identifier, args).await.map(|_| ())
    }
}

#[async_trait]
impl<R: JsRuntime> GridInterop for JsGridInterop<R> {
    async fn scrollbar_width(&self, container_class: &str) -> Result<f32, InteropError> {
        self.call(GET_SCROLL_BAR_WIDTH, vec![json!(container_class)]).await
    }

    async fn text_widths(
        &self,
        measure_class: &str,
        current_widths: &[f32],
        texts: &[String],
    ) -> Result<Vec<f32>, InteropError> {
        let widths: Vec<f32> = self
            .call(
                GET_TEXT_WIDTHS,
                vec![json!(measure_class), json!(current_widths), json!(texts)],
            )
            .await?;
        if widths.len() != current_widths.len() {
            return Err(InteropError::LengthMismatch {
                expected: current_widths.len(),
                actual: widths.len(),
            });
        }
        Ok(widths)
    }

    async fn scroll_to_row(&self, row_id: &str) -> Result<(), InteropError> {
        self.call_void(SCROLL_TO_INDICATED_ROW, vec![json!(row_id)]).await
    }

    async fn sync_scroll(&self, header_id: &str, body_id: &str) -> Result<(), InteropError> {
        self.call_void(SYNC_SCROLL_BY_ID, vec![json!(header_id), json!(body_id)])
            .await
    }
}
