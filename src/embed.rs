use log::{debug, error};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};
use web_sys::{Document, HtmlScriptElement, Window};

use crate::config;
use crate::feed::{Attach, Detach, EmbedSignals, RemoteEmbed};

/// Loads Instagram's `embed.js` once per page and lets it turn the
/// `blockquote.instagram-media` placeholders into iframes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstagramEmbed {
    script_src: String,
    script_id: String,
}

impl Default for InstagramEmbed {
    fn default() -> Self {
        Self {
            script_src: config::INSTAGRAM_EMBED_SCRIPT.to_string(),
            script_id: config::INSTAGRAM_EMBED_SCRIPT_ID.to_string(),
        }
    }
}

impl RemoteEmbed for InstagramEmbed {
    fn attach(&self, signals: EmbedSignals) -> Attach {
        let Some(window) = web_sys::window() else {
            return Attach::Unavailable;
        };
        let Some(document) = window.document() else {
            return Attach::Unavailable;
        };

        // A previous mount already brought the runtime in.
        if reprocess_embeds(&window) {
            debug!("Instagram embed runtime already present");
            return Attach::Ready;
        }

        match self.listen(&document, signals) {
            Ok(detach) => Attach::Loading(detach),
            Err(err) => {
                error!("Failed to inject Instagram embed script: {:?}", err);
                Attach::Unavailable
            }
        }
    }
}

impl InstagramEmbed {
    fn listen(&self, document: &Document, signals: EmbedSignals) -> Result<Detach, JsValue> {
        // Reuse a script that is still loading from an earlier mount.
        let (script, injected) = match document.get_element_by_id(&self.script_id) {
            Some(existing) => (existing.dyn_into::<HtmlScriptElement>()?, false),
            None => {
                let script = document
                    .create_element("script")?
                    .dyn_into::<HtmlScriptElement>()?;
                script.set_id(&self.script_id);
                script.set_async(true);
                script.set_src(&self.script_src);
                (script, true)
            }
        };

        let on_load = {
            let signals = signals.clone();
            Closure::wrap(Box::new(move || {
                if let Some(window) = web_sys::window() {
                    reprocess_embeds(&window);
                }
                signals.loaded();
            }) as Box<dyn FnMut()>)
        };
        let on_error = Closure::wrap(Box::new(move || {
            signals.failed();
        }) as Box<dyn FnMut()>);

        script.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())?;
        script.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())?;

        if injected {
            let body = document.body().ok_or_else(|| JsValue::from_str("document has no body"))?;
            body.append_child(&script)?;
        }

        Ok(Detach::new(move || {
            let _ = script.remove_event_listener_with_callback("load", on_load.as_ref().unchecked_ref());
            let _ = script.remove_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
            // Same as leaving the page: the half-loaded script goes away with us.
            if injected && !is_runtime_present() {
                script.remove();
            }
        }))
    }
}

fn is_runtime_present() -> bool {
    web_sys::window()
        .and_then(|window| Reflect::get(&window, &JsValue::from_str("instgrm")).ok())
        .map_or(false, |runtime| !runtime.is_undefined())
}

/// Asks `window.instgrm.Embeds.process()` to render any placeholders on the
/// page. Returns false when the runtime isn't loaded yet.
fn reprocess_embeds(window: &Window) -> bool {
    let Ok(runtime) = Reflect::get(window, &JsValue::from_str("instgrm")) else {
        return false;
    };
    if runtime.is_undefined() {
        return false;
    }
    let process = Reflect::get(&runtime, &JsValue::from_str("Embeds"))
        .and_then(|embeds| Ok((Reflect::get(&embeds, &JsValue::from_str("process"))?, embeds)));
    if let Ok((process, embeds)) = process {
        if let Some(process) = process.dyn_ref::<Function>() {
            let _ = process.call0(&embeds);
        }
    }
    true
}
