//! Image with load-failure fallback
//!
//! Shows the primary reference and swaps to the fallback the first time the
//! host reports a load error for it. The failure is remembered per primary
//! reference, so a component reused for another record starts fresh.

use dioxus::prelude::*;
use portfolio_core::ImageSource;

#[component]
pub fn FallbackImage(
    /// Primary and fallback references
    source: ImageSource,
    /// Alt text
    alt: String,
    #[props(default = None)]
    class: Option<String>,
) -> Element {
    let mut failed_primary: Signal<Option<String>> = use_signal(|| None);

    let mut shown = source.clone();
    if failed_primary.read().as_deref() == Some(source.primary()) {
        shown.mark_failed();
    }
    let src = shown.current().to_string();
    let primary = source.primary().to_string();

    rsx! {
        img {
            class: class.unwrap_or_default(),
            src: "{src}",
            alt: "{alt}",
            onerror: move |_| {
                if failed_primary.read().as_deref() != Some(primary.as_str()) {
                    tracing::debug!(primary = %primary, "Image failed to load, using fallback");
                    failed_primary.set(Some(primary.clone()));
                }
            },
        }
    }
}
