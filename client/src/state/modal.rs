//! Singleton overlay panels (login, profile, training).
//!
//! DESIGN
//! ======
//! One slot holds the open modal; opening another replaces it. The display
//! style and the `active` class both derive from that slot, so they can no
//! longer drift apart.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

/// The overlay panels the app knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Login,
    Profile,
    Training,
}

impl ModalKind {
    #[must_use]
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::Login => "loginModal",
            Self::Profile => "profileModal",
            Self::Training => "trainingModal",
        }
    }
}

/// Where a click inside a modal overlay landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalClick {
    /// The event target is the backdrop element itself.
    Backdrop,
    /// The event target is inside the modal content.
    Content,
}

/// Currently open modal, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub active: Option<ModalKind>,
}

impl ModalState {
    pub fn open(&mut self, kind: ModalKind) {
        if let Some(prev) = self.active.filter(|prev| *prev != kind) {
            log::debug!("modal {prev:?} replaced by {kind:?}");
        }
        self.active = Some(kind);
    }

    /// Close `kind` if it is the open modal.
    pub fn close(&mut self, kind: ModalKind) -> bool {
        if self.active == Some(kind) {
            self.active = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_open(&self, kind: ModalKind) -> bool {
        self.active == Some(kind)
    }

    /// Inline `display` value for the modal element.
    #[must_use]
    pub fn display(&self, kind: ModalKind) -> &'static str {
        if self.is_open(kind) { "flex" } else { "none" }
    }

    /// Class list for the modal element.
    #[must_use]
    pub fn class(&self, kind: ModalKind) -> &'static str {
        if self.is_open(kind) { "modal active" } else { "modal" }
    }

    /// Close on a click whose target is the backdrop itself; clicks on the
    /// content never close.
    pub fn handle_click(&mut self, kind: ModalKind, click: ModalClick) -> bool {
        match click {
            ModalClick::Backdrop => self.close(kind),
            ModalClick::Content => false,
        }
    }

    /// Escape closes the modal.
    pub fn handle_key(&mut self, kind: ModalKind, key: &str) -> bool {
        key == "Escape" && self.close(kind)
    }
}
