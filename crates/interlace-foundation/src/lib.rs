//! Separator-aware child delegates for lazy list pipelines.
//!
//! A lazy list pipeline asks its delegate two things during layout: "how
//! many children are there?" and "build the child at index i". This crate
//! provides that contract ([`ChildDelegate`]), a plain builder-backed
//! implementation of it ([`ChildBuilderDelegate`]), and the reason the crate
//! exists: [`SeparatedBuilderDelegate`], which presents a list of items with
//! separators interleaved between them through the exact same contract, so
//! the pipeline's virtualization, recycling, and accessibility machinery
//! never learns that separators are a separate concept.
//!
//! # Example
//!
//! ```rust,ignore
//! use interlace_foundation::{ChildDelegate, SeparatedBuilderDelegate};
//!
//! let delegate = SeparatedBuilderDelegate::new(
//!     contacts.len(),
//!     move |cx, index| contact_row(cx, &contacts[index]),
//!     move |cx, _index| divider(cx),
//! );
//!
//! // The host sees 2N - 1 children: item, divider, item, divider, item...
//! for index in 0..delegate.child_count() {
//!     let element = delegate.build(cx, index);
//! }
//! ```

pub mod builder_delegate;
pub mod child_delegate;
pub mod interleave;
pub mod separated_delegate;

pub use builder_delegate::*;
pub use child_delegate::*;
pub use interleave::*;
pub use separated_delegate::*;
