//! Overlay state machines: the single-selection lightbox used by the photo
//! gallery and project cards, and the boolean [`Toggle`] behind the mobile
//! nav menu.

use std::fmt::Debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxState<Id> {
    Closed,
    OpenFor(Id),
}

/// Where a click landed, from the controller's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Click<Id> {
    Item(Id),
    Backdrop,
    /// Inside the overlay content. Contained: never reaches the backdrop.
    Content,
    CloseButton,
}

/// What the host has to animate after a state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition<Id> {
    None,
    Enter(Id),
    Exit(Id),
    Swap { from: Id, to: Id },
}

impl<Id> Click<Id> {
    /// Classify a click that landed inside an open overlay.
    pub fn in_overlay(on_close_button: bool, inside_content: bool) -> Self {
        if on_close_button {
            Click::CloseButton
        } else if inside_content {
            Click::Content
        } else {
            Click::Backdrop
        }
    }
}

impl<Id> Transition<Id> {
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Transition::None)
    }
}

#[derive(Clone, Debug)]
pub struct Lightbox<Id> {
    state: LightboxState<Id>,
}

impl<Id> Default for Lightbox<Id> {
    fn default() -> Self {
        Self {
            state: LightboxState::Closed,
        }
    }
}

impl<Id: Copy + PartialEq + Debug> Lightbox<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> LightboxState<Id> {
        self.state
    }

    #[inline]
    pub fn selected(&self) -> Option<Id> {
        match self.state {
            LightboxState::Closed => None,
            LightboxState::OpenFor(id) => Some(id),
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.selected().is_some()
    }

    pub fn open(&mut self, id: Id) -> Transition<Id> {
        let prev = std::mem::replace(&mut self.state, LightboxState::OpenFor(id));
        match prev {
            LightboxState::Closed => Transition::Enter(id),
            LightboxState::OpenFor(old) if old == id => Transition::None,
            LightboxState::OpenFor(old) => Transition::Swap { from: old, to: id },
        }
    }

    pub fn close(&mut self) -> Transition<Id> {
        match std::mem::replace(&mut self.state, LightboxState::Closed) {
            LightboxState::Closed => Transition::None,
            LightboxState::OpenFor(old) => Transition::Exit(old),
        }
    }

    pub fn handle(&mut self, click: Click<Id>) -> Transition<Id> {
        let t = match click {
            Click::Item(id) => self.open(id),
            Click::Backdrop | Click::CloseButton => self.close(),
            Click::Content => Transition::None,
        };
        if !t.is_none() {
            log::debug!("[lightbox] {:?} -> {:?}", click, self.state);
        }
        t
    }

    /// Keyboard handling; `Escape` closes.
    pub fn handle_key(&mut self, key: &str) -> Transition<Id> {
        match key {
            "Escape" | "Esc" => self.close(),
            _ => Transition::None,
        }
    }

    /// Look up the selected record. A selection with no matching record
    /// yields `None` and the host renders nothing.
    pub fn selected_in<'a, T>(&self, items: &'a [T], id_of: impl Fn(&T) -> Id) -> Option<&'a T> {
        let id = self.selected()?;
        items.iter().find(|item| id_of(item) == id)
    }
}

/// Open/closed overlay without a selection (mobile nav menu).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Toggle {
    open: bool,
}

impl Toggle {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> Transition<()> {
        if self.open {
            self.close()
        } else {
            self.open()
        }
    }

    pub fn open(&mut self) -> Transition<()> {
        if std::mem::replace(&mut self.open, true) {
            Transition::None
        } else {
            Transition::Enter(())
        }
    }

    pub fn close(&mut self) -> Transition<()> {
        if std::mem::replace(&mut self.open, false) {
            Transition::Exit(())
        } else {
            Transition::None
        }
    }
}

/// Counts open overlays so the page scroll is locked while any is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollLock {
    holders: u32,
}

/// What the host should do with the smooth-scroll driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockChange {
    Lock,
    Unlock,
    Unchanged,
}

impl ScrollLock {
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.holders > 0
    }

    /// Account for an overlay transition.
    pub fn apply<Id>(&mut self, t: &Transition<Id>) -> LockChange {
        match t {
            Transition::Enter(_) => {
                self.holders += 1;
                if self.holders == 1 {
                    LockChange::Lock
                } else {
                    LockChange::Unchanged
                }
            }
            Transition::Exit(_) if self.holders > 0 => {
                self.holders -= 1;
                if self.holders == 0 {
                    LockChange::Unlock
                } else {
                    LockChange::Unchanged
                }
            }
            _ => LockChange::Unchanged,
        }
    }
}
