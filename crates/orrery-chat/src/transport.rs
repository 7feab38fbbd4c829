//! Browser `fetch` transport.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, Headers, Request, RequestInit, Response, Url};

use crate::error::{ChatError, ChatResult};
use crate::protocol::{decode_text_reply, is_image, PendingRequest, Reply};

fn js_err(e: JsValue) -> ChatError {
    ChatError::Network(format!("{:?}", e))
}

/// POST the JSON body and wait for a 2xx response.
async fn fetch_ok(request: &PendingRequest) -> ChatResult<Response> {
    let headers = Headers::new().map_err(js_err)?;
    headers.set("Content-Type", "application/json").map_err(js_err)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(&request.body));

    let req = Request::new_with_str_and_init(&request.endpoint, &init).map_err(js_err)?;
    let win = web_sys::window().ok_or_else(|| ChatError::Network("no window".to_string()))?;
    let resp: Response = JsFuture::from(win.fetch_with_request(&req))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;

    if !resp.ok() {
        return Err(ChatError::Status {
            status: resp.status(),
            text: resp.status_text(),
        });
    }
    Ok(resp)
}

/// POST a request whose reply body is not needed.
pub async fn send(request: &PendingRequest) -> ChatResult<()> {
    fetch_ok(request).await.map(|_| ())
}

/// POST the request and decode the reply. Image replies become object URLs;
/// whoever drops the entry revokes them with [`revoke_object_urls`].
pub async fn post(request: &PendingRequest) -> ChatResult<Reply> {
    let resp = fetch_ok(request).await?;

    let content_type = resp.headers().get("content-type").map_err(js_err)?;
    if is_image(content_type.as_deref()) {
        let blob: Blob = JsFuture::from(resp.blob().map_err(js_err)?)
            .await
            .map_err(js_err)?
            .dyn_into()
            .map_err(js_err)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;
        return Ok(Reply::Image { url });
    }

    let text = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .as_string()
        .ok_or_else(|| ChatError::Payload("response.text() was not a string".to_string()))?;
    Ok(Reply::Text(decode_text_reply(&text)?))
}

pub fn revoke_object_urls<'a>(urls: impl IntoIterator<Item = &'a str>) {
    for url in urls {
        if let Err(err) = Url::revoke_object_url(url) {
            log::warn!("failed to revoke {url}: {:?}", err);
        }
    }
}
