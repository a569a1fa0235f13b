//! One-time `<style>` injection keyed by element id.

/// Positioning and slide animations for notification toasts.
pub const NOTIFICATION_CSS: &str = "\
.notification{position:fixed;top:20px;right:20px;z-index:10000;max-width:300px;animation:slideInRight .3s ease-out}\
.notification-stack{position:fixed;top:20px;right:20px;z-index:10000;display:flex;flex-direction:column;gap:.5rem}\
.notification-stack .notification{position:static}\
.notification--leaving{animation:slideOutRight .3s ease-out forwards}\
@keyframes slideInRight{from{transform:translateX(100%);opacity:0}to{transform:translateX(0);opacity:1}}\
@keyframes slideOutRight{from{transform:translateX(0);opacity:1}to{transform:translateX(100%);opacity:0}}";

/// Append a `<style id=...>` to `<head>` unless one with that id exists.
pub fn ensure_style(id: &str, css: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if doc.get_element_by_id(id).is_some() {
            return;
        }
        let (Ok(style), Some(head)) = (doc.create_element("style"), doc.head()) else {
            return;
        };
        style.set_id(id);
        style.set_text_content(Some(css));
        if let Err(e) = head.append_child(&style) {
            log::warn!("style injection failed for #{id}: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, css);
    }
}
