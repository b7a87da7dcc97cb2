#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/eglinfo/0.1.0/")]
#![cfg_attr(feature = "doc", feature(doc_cfg))]

//! Enumerate the displays, devices, and framebuffer configurations exposed by EGL.
//!
//! The heart of this crate is a set of static tables: [symbol tables](symbol) that
//! name raw EGL values, an [attribute registry](attrib::ATTRIBUTES) that says how each
//! config attribute is decoded, and a [device property registry](device::DEVICE_PROPERTIES).
//! [`render`] turns a queried value into text using those tables.
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> Result<(), eglinfo::Error> {
//! use eglinfo::{sys::Egl, Display};
//!
//! let egl = Egl::load()?;
//! let mut display = Display::open_default(&egl)?;
//! let (major, minor) = display.initialize()?;
//! println!("EGL {major}.{minor}");
//! for (i, config) in display.configs()?.into_iter().enumerate() {
//!     eglinfo::report::write_config(&mut std::io::stdout(), "", i, &display.extensions(), |id| {
//!         display.config_attrib(config, id)
//!     })?;
//! }
//! # Ok(())
//! # }
//! ```

pub use self::{
    attrib::{Attribute, Decoding, DecodingRule},
    device::{Device, DeviceProperty, PropertyKind},
    display::{client_extensions, Config, Display},
    error::{error_name, Error, Result},
    render::{render, DecodedValue},
    symbol::{SymbolEntry, SymbolTable},
};

pub mod attrib;
pub mod device;
mod display;
mod error;
pub mod render;
pub mod report;
pub mod symbol;
#[cfg_attr(feature = "doc", doc(cfg(feature = "sys")))]
#[cfg_attr(not(feature = "sys"), doc(hidden))]
pub mod sys;
