// SPDX-License-Identifier: Apache-2.0

//! UI-agnostic ports for the two blocking dialogs the view needs. The sync
//! logic calls through these traits so it can be exercised without a real
//! UI; a browser shell would back them with `confirm()`/`alert()`.

/// Yes/no gate shown before destructive actions.
pub trait ConfirmPort {
    fn confirm(&self, prompt: &str) -> bool;
}

/// One-way user notification for transport failures.
pub trait NotifyPort {
    fn notify(&self, message: &str);
}

/// Confirms everything; useful for headless tooling.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl ConfirmPort for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Drops notifications on the floor.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotify;

impl NotifyPort for SilentNotify {
    fn notify(&self, _message: &str) {}
}
