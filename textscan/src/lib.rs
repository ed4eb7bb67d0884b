// SPDX-License-Identifier: Apache-2.0

//! Allocation-free text scanning and compact float formatting.
//!
//! [`TextView`] walks a borrowed byte buffer: skipping whitespace and
//! comments, pulling out delimited, alphanumeric and quoted tokens, and
//! parsing integer and float literals. [`ftoa`] goes the other way, writing
//! an `f32` as short decimal text into a fixed-size buffer.

#![cfg_attr(not(test), no_std)]

// Compile-time configuration validation
mod config_check;

pub mod classify;

mod cursor;
mod values;

mod view;
pub use view::{Split, TextView};

mod format_error;
pub use format_error::FormatError;

#[cfg(feature = "float")]
mod ascii_buffer;
#[cfg(feature = "float")]
mod itoa;
#[cfg(feature = "float")]
mod pow10;

#[cfg(feature = "float")]
mod ftoa;
#[cfg(feature = "float")]
pub use ftoa::{ftoa, CompactFloat, FTOA_BUFFER_SIZE};
