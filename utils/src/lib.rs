use fluent::{FluentBundle, FluentResource};
use gloo::utils::window;
use unic_langid::langid;
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// look up a message in a fluent bundle, falling back to the key itself
/// when the message is missing so a typo never takes a page down
#[macro_export]
macro_rules! tr {
    ($model:expr, $key:expr) => {{
        let key: &str = $key;
        match $model.get_message(key).and_then(|message| message.value()) {
            Some(pattern) => {
                let mut errors = Vec::new();
                $model
                    .format_pattern(pattern, None, &mut errors)
                    .to_string()
            }
            None => key.to_string(),
        }
    }};
    ($model:expr, $key:expr, $($arg_name:expr => $arg_value:expr),+ $(,)?) => {{
        let key: &str = $key;
        match $model.get_message(key).and_then(|message| message.value()) {
            Some(pattern) => {
                let mut args = fluent::FluentArgs::new();
                $(
                    args.set($arg_name, $arg_value);
                )+

                let mut errors = Vec::new();
                $model
                    .format_pattern(pattern, Some(&args), &mut errors)
                    .to_string()
            }
            None => key.to_string(),
        }
    }};
}

pub fn create_bundle(content: impl Into<String>) -> FluentBundle<FluentResource> {
    let lang_id = langid!("en-US");
    let mut bundle = FluentBundle::new(vec![lang_id]);
    // placeables are rendered straight into the dom, the bidi isolation marks only get in the way
    bundle.set_use_isolating(false);
    let resource = FluentResource::try_new(content.into()).unwrap_or_else(|(resource, errors)| {
        log::error!("fluent resource parsed with errors: {:?}", errors);
        resource
    });
    bundle.add_resource_overriding(resource);

    bundle
}

fn local_storage() -> Result<Storage, JsValue> {
    window()
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("local storage is not available"))
}

/// read a raw string from local storage
pub fn get_local_storage(key: &str) -> Option<String> {
    match local_storage() {
        Ok(storage) => storage.get_item(key).ok().flatten(),
        Err(err) => {
            log::error!("read local storage {key} failed: {:?}", err);
            None
        }
    }
}

pub fn set_local_storage(key: &str, value: &str) -> Result<(), JsValue> {
    local_storage()?.set_item(key, value)
}

pub fn remove_local_storage(key: &str) -> Result<(), JsValue> {
    local_storage()?.remove_item(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RES: &str = r#"
greeting = Hello
page_of = Page { $current } of { $total }
"#;

    #[test]
    fn tr_formats_plain_and_argument_messages() {
        let bundle = create_bundle(RES);
        assert_eq!(tr!(bundle, "greeting"), "Hello");
        assert_eq!(
            tr!(bundle, "page_of", "current" => 2, "total" => 6),
            "Page 2 of 6"
        );
    }

    #[test]
    fn tr_falls_back_to_key_for_missing_message() {
        let bundle = create_bundle(RES);
        assert_eq!(tr!(bundle, "missing"), "missing");
    }
}
