// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_virtual_scroll --heading-base-level=0

//! Understory Virtual Scroll: stateless range scanning and size resolution for virtualized views.
//!
//! This crate answers two questions for a strip of variably-sized items inside a
//! scrollable container:
//!
//! - Given a declarative size for every item, what are the concrete sizes?
//!   See [`resolve_sizes`] and [`SizeSpec`].
//! - Given those sizes, a scroll position, and a container size, which
//!   contiguous items must be rendered, and where does the first one start?
//!   See [`scan_visible_range`] and [`VisibleRange`].
//!
//! Both are pure functions over caller-supplied accessors. Nothing is cached and
//! nothing is mutated outside the call, so hosts can recompute on every scroll
//! or resize event.
//!
//! The core concepts are:
//!
//! - [`Scalar`]: a small abstraction over `f32`/`f64` used for sizes and positions.
//! - [`ItemSize`]: `px`, `%` of the container, or `fr` shares of the space left
//!   after all `px` and `%` items. [`SizeBound`] clamps a resolved size from
//!   either side, and [`SizeSpec`] bundles a size with its bounds.
//! - [`ListLayout`]: one axis worth of resolved sizes plus the rendered range,
//!   with derived totals and per-item positions.
//! - [`GridLayout`]: two independent [`ListLayout`]s (columns and rows) combined
//!   into a rendered block, using `kurbo` geometry.
//!
//! This crate deliberately does **not** know about widgets, display trees, or any
//! particular UI framework. Host frameworks are responsible for:
//!
//! - Measuring the container and tracking its scroll position.
//! - Rendering the items in [`ListLayout::rendered_indexes`], placed after
//!   [`ListLayout::offset`] worth of spacer inside a strip of
//!   [`ListLayout::total_size`].
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_virtual_scroll::{DEFAULT_OVERSCAN, ItemSize, ListLayout, SizeSpec};
//!
//! // A 60px header followed by 500 rows that split the rest of a 600px viewport
//! // into tenths, but never shrink below 48px.
//! let header = SizeSpec::new(ItemSize::Pixels(60.0));
//! let row: SizeSpec<f64> = SizeSpec::parse_lenient("1fr", Some("48px"), None);
//! let spec_of = |i: usize| if i == 0 { header } else { row };
//!
//! let layout = ListLayout::compute(600.0, 501, spec_of, 1_000.0, DEFAULT_OVERSCAN);
//!
//! let visible = layout.rendered_indexes();
//! assert!(!visible.is_empty());
//! assert!(layout.offset() <= 1_000.0);
//! assert_eq!(layout.item_position(1), 60.0);
//! ```
//!
//! ## Size descriptors
//!
//! Descriptors can be built directly or parsed from their text form:
//!
//! ```rust
//! use understory_virtual_scroll::{ItemSize, SizeBound, SizeSpec, resolve_sizes};
//!
//! let specs: [SizeSpec<f64>; 3] = [
//!     "100px".parse::<ItemSize<f64>>().unwrap().into(),
//!     SizeSpec::new(ItemSize::Percent(10.0)).with_max(SizeBound::Pixels(30.0)),
//!     SizeSpec::parse_lenient("1fr", None, None),
//! ];
//! let sizes = resolve_sizes(500.0, specs.len(), |i| specs[i]);
//! // 10% of 500 is clamped to 30; the fraction takes 500 - 100 - 50.
//! assert_eq!(sizes, [100.0, 30.0, 350.0]);
//! ```
//!
//! Note that fractions see the pre-clamp size of fixed items: the `10%` item
//! claims 50 when computing the fraction unit, even though it renders at 30.
//!
//! ## Edge cases
//!
//! - A container with no size renders nothing: [`scan_visible_range`] returns `None`.
//! - A strip with no items yields an empty range rather than a single index.
//! - A viewport that runs past the last item renders through the last item.
//! - A viewport that starts past the last item falls back to rendering index `0`
//!   (plus overscan).
//! - Malformed descriptors, when parsed leniently, contribute zero size, and
//!   malformed bounds are ignored.
//!
//! ## Features
//!
//! - `std` *(default)*: enables `std` in `kurbo`.
//! - `libm`: `no_std` float support for `kurbo`.
//! - `serde`: text-form serialization of [`ItemSize`], [`SizeBound`], and [`SizeSpec`].
//!
//! Scanning is linear in the number of items. Diagnostics are emitted through
//! the `log` facade.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod grid;
mod list;
mod resolve;
mod scalar;
mod scan;
mod size;

pub use grid::{GridLayout, GridOverscan, GridViewport};
pub use list::{DEFAULT_OVERSCAN, ListLayout};
pub use resolve::resolve_sizes;
pub use scalar::Scalar;
pub use scan::{VisibleRange, scan_visible_range};
pub use size::{ItemSize, ParseSizeError, SizeBound, SizeSpec};
