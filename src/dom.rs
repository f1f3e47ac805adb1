//! Host page bridge.
//!
//! The few page behaviors Dioxus has no element-level handle for: body
//! scroll lock, window scroll position, document-wide key presses, viewport
//! intersection, and smooth scrolling. Each goes through `document::eval`.

use dioxus::prelude::*;
use portfolio_core::{scroll_target, Section};

/// Streams every document-level key press, regardless of focus
pub const KEYDOWN_LISTENER: &str = r#"
document.addEventListener('keydown', (e) => { dioxus.send(e.key); });
"#;

/// Streams the window's vertical scroll position, starting with the current one
pub const SCROLL_LISTENER: &str = r#"
dioxus.send(window.scrollY);
window.addEventListener('scroll', () => { dioxus.send(window.scrollY); }, { passive: true });
"#;

/// Streams `[key, intersecting, top]` for every animated element carrying a
/// `data-reveal-key`, including ones mounted later. Each key received back
/// stops observing that element.
pub const REVEAL_LISTENER: &str = r#"
const observer = new IntersectionObserver((entries) => {
    for (const e of entries) {
        dioxus.send([Number(e.target.dataset.revealKey), e.isIntersecting, e.boundingClientRect.top]);
    }
});
const watch = () => document.querySelectorAll('.fade-up[data-reveal-key]').forEach((el) => {
    if (!el.dataset.revealWatched) {
        el.dataset.revealWatched = '1';
        observer.observe(el);
    }
});
watch();
new MutationObserver(watch).observe(document.body, { childList: true, subtree: true });
while (true) {
    const key = await dioxus.recv();
    const el = document.querySelector(`[data-reveal-key="${key}"]`);
    if (el) observer.unobserve(el);
}
"#;

/// Set `document.body.style.overflow`
pub fn set_body_overflow(value: &str) {
    let _ = document::eval(&format!("document.body.style.overflow = '{}';", value));
}

/// Smooth-scroll the window to an absolute offset
pub fn scroll_window_to(top: f64) {
    let _ = document::eval(&format!(
        "window.scrollTo({{ top: {}, behavior: 'smooth' }});",
        top
    ));
}

/// Smooth-scroll so `section` sits just below the fixed header.
///
/// Missing sections are ignored.
pub async fn scroll_to_section(section: Section, header_offset: f64) {
    let mut eval = document::eval(&format!(
        r#"
        const el = document.getElementById('{}');
        dioxus.send(el ? [el.getBoundingClientRect().top, window.pageYOffset] : null);
        "#,
        section.id()
    ));

    match eval.recv::<Option<(f64, f64)>>().await {
        Ok(Some((top, page_offset))) => {
            scroll_window_to(scroll_target(top, page_offset, header_offset));
        }
        Ok(None) => tracing::debug!(section = section.id(), "Section not on page"),
        Err(e) => tracing::warn!("Failed to measure section {}: {:?}", section.id(), e),
    }
}
