//! Dismissible notices with timed removal.
//!
//! [`Page`] models the parts of the document the helper touches: an optional
//! `.container` region and the document body. Notices are prepended to the
//! container when the page has one, otherwise to the body.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::time::sleep;
use tracing::{debug, warn};

/// How long a notice stays on the page unless dismissed earlier.
pub const NOTICE_LIFETIME: Duration = Duration::from_secs(5);

/// Visual style of a notice, rendered as the `alert-{kind}` class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NoticeKind {
    #[default]
    Success,
    Danger,
    Warning,
    Info,
    Other(String),
}

impl NoticeKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Other(kind) => kind,
        }
    }
}

impl From<&str> for NoticeKind {
    fn from(kind: &str) -> Self {
        match kind {
            "success" => Self::Success,
            "danger" => Self::Danger,
            "warning" => Self::Warning,
            "info" => Self::Info,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle to a notice shown on a [`Page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoticeId(u64);

/// A notice element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn class_name(&self) -> String {
        format!("alert alert-{} alert-dismissible fade show", self.kind)
    }

    /// Markup for the notice, with a close button.
    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"{}\" role=\"alert\">{}<button type=\"button\" class=\"btn-close\" data-bs-dismiss=\"alert\" aria-label=\"Close\"></button></div>",
            self.class_name(),
            escape_html(&self.message)
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Where a notice was inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// The first `.container` element.
    Container,
    /// The document body, used when there is no container.
    Body,
}

#[derive(Debug, Default)]
struct PageState {
    has_container: bool,
    container: Vec<Notice>,
    body: Vec<Notice>,
    next_id: u64,
}

impl PageState {
    fn region_mut(&mut self, region: Region) -> &mut Vec<Notice> {
        match region {
            Region::Container => &mut self.container,
            Region::Body => &mut self.body,
        }
    }

    fn remove(&mut self, id: NoticeId) -> bool {
        for region in [Region::Container, Region::Body] {
            let notices = self.region_mut(region);
            if let Some(index) = notices.iter().position(|notice| notice.id == id) {
                notices.remove(index);
                return true;
            }
        }
        false
    }
}

/// The page notices are rendered into.
///
/// Cloning a `Page` yields another handle to the same document.
#[derive(Debug, Clone, Default)]
pub struct Page {
    state: Arc<Mutex<PageState>>,
}

impl Page {
    /// A page without a `.container` element.
    pub fn new() -> Self {
        Self::default()
    }

    /// A page with a `.container` element.
    pub fn with_container() -> Self {
        let page = Self::default();
        page.lock().has_container = true;
        page
    }

    pub fn has_container(&self) -> bool {
        self.lock().has_container
    }

    /// Show `message` at the top of the container (or body) and schedule its
    /// removal after [`NOTICE_LIFETIME`].
    ///
    /// The removal is a no-op if the notice is already gone. Outside a tokio
    /// runtime nothing is scheduled and the notice stays until dismissed.
    pub fn show_notice(&self, message: impl Into<String>, kind: impl Into<NoticeKind>) -> NoticeId {
        let id = {
            let mut state = self.lock();
            let id = NoticeId(state.next_id);
            state.next_id += 1;
            let region = if state.has_container {
                Region::Container
            } else {
                Region::Body
            };
            let notice = Notice {
                id,
                message: message.into(),
                kind: kind.into(),
            };
            state.region_mut(region).insert(0, notice);
            id
        };

        match Handle::try_current() {
            Ok(handle) => {
                let page = self.clone();
                handle.spawn(async move {
                    sleep(NOTICE_LIFETIME).await;
                    if page.remove(id) {
                        debug!(?id, "notice expired");
                    }
                });
            }
            Err(_) => warn!(?id, "no async runtime; notice will not expire"),
        }

        id
    }

    /// Remove a notice now, as the close button does.
    ///
    /// Returns `false` if it was already gone.
    pub fn dismiss(&self, id: NoticeId) -> bool {
        self.remove(id)
    }

    /// Whether the notice is still on the page.
    pub fn contains(&self, id: NoticeId) -> bool {
        let state = self.lock();
        state
            .container
            .iter()
            .chain(state.body.iter())
            .any(|notice| notice.id == id)
    }

    /// Notices in `region`, top first.
    pub fn notices(&self, region: Region) -> Vec<Notice> {
        self.lock().region_mut(region).clone()
    }

    /// Markup of the notices in `region`, top first.
    pub fn render(&self, region: Region) -> String {
        self.notices(region).iter().map(Notice::to_html).collect()
    }

    fn remove(&self, id: NoticeId) -> bool {
        self.lock().remove(id)
    }

    fn lock(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_defaults_to_success() {
        assert_eq!(NoticeKind::default(), NoticeKind::Success);
        assert_eq!(NoticeKind::from("danger"), NoticeKind::Danger);
        assert_eq!(NoticeKind::from("primary").as_str(), "primary");
    }

    #[test]
    fn test_notice_markup() {
        let notice = Notice {
            id: NoticeId(0),
            message: "Camp <North> & co".to_string(),
            kind: NoticeKind::Warning,
        };
        let html = notice.to_html();
        assert!(html.starts_with(
            "<div class=\"alert alert-warning alert-dismissible fade show\" role=\"alert\">"
        ));
        assert!(html.contains("Camp &lt;North&gt; &amp; co"));
        assert!(html.contains("class=\"btn-close\""));
    }

    #[tokio::test(start_paused = true)]
    async fn test_notice_prepended_to_container() {
        let page = Page::with_container();
        let first = page.show_notice("Saved", NoticeKind::default());
        let second = page.show_notice("Deleted", "danger");

        let notices = page.notices(Region::Container);
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].id, second);
        assert_eq!(notices[1].id, first);
        assert!(page.notices(Region::Body).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_falls_back_to_body_without_container() {
        let page = Page::new();
        assert!(!page.has_container());
        let id = page.show_notice("Saved", NoticeKind::Success);

        assert!(page.notices(Region::Container).is_empty());
        assert_eq!(page.notices(Region::Body)[0].id, id);
    }

    #[tokio::test(start_paused = true)]
    async fn test_notice_removed_after_lifetime() {
        let page = Page::with_container();
        let id = page.show_notice("Victim added", NoticeKind::Success);

        sleep(NOTICE_LIFETIME - Duration::from_millis(100)).await;
        assert!(page.contains(id));

        sleep(Duration::from_millis(200)).await;
        assert!(!page.contains(id));
        assert_eq!(page.render(Region::Container), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiry_after_manual_dismiss_is_noop() {
        let page = Page::with_container();
        let dismissed = page.show_notice("first", NoticeKind::Info);
        sleep(Duration::from_secs(1)).await;
        let kept = page.show_notice("second", NoticeKind::Info);

        assert!(page.dismiss(dismissed));
        assert!(!page.dismiss(dismissed));

        sleep(Duration::from_millis(4500)).await;
        assert!(!page.contains(dismissed));
        assert!(page.contains(kept));

        sleep(Duration::from_secs(1)).await;
        assert!(!page.contains(kept));
    }

    #[test]
    fn test_without_runtime_notice_stays() {
        let page = Page::with_container();
        let id = page.show_notice("offline", NoticeKind::Warning);
        assert!(page.contains(id));
        assert!(page.dismiss(id));
    }
}
