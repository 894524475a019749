#![forbid(unsafe_code)]

//! Client half of taskdeck: renders the server-side truth and keeps it
//! fresh by reloading the full list after every mutation. There are no
//! optimistic local updates; the server response is the only source of
//! state.

pub mod api;
pub mod ports;
pub mod render;
pub mod view;

pub use api::{TaskApi, TransportError};
pub use ports::{ConfirmPort, NotifyPort};
pub use view::SyncView;
