// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of per-item [`SizeSpec`] descriptors into concrete sizes.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::{ItemSize, Scalar, SizeSpec};

/// Resolve `len` size descriptors against a container into concrete sizes.
///
/// - [`ItemSize::Pixels`] items keep their size.
/// - [`ItemSize::Percent`] items take that percentage of `container_size`.
/// - [`ItemSize::Fraction`] items share whatever `container_size` is left after
///   all pixel and percent items, proportionally to their share counts.
///
/// Each item's `min`/`max` bounds are then applied to its own pre-clamp size.
/// Both bounds are tested against that same value; when both apply, `min` wins.
///
/// The returned list has exactly `len` entries in index order. Fixed items that
/// overflow the container leave a negative space to share; fraction items then
/// resolve to negative sizes unless a `min` bound catches them. Hosts can use
/// that as an overflow signal.
///
/// ```rust
/// use understory_virtual_scroll::{ItemSize, SizeSpec, resolve_sizes};
///
/// let specs = [
///     SizeSpec::new(ItemSize::Pixels(100.0)),
///     SizeSpec::new(ItemSize::Fraction(1.0)),
///     SizeSpec::new(ItemSize::Fraction(1.0)),
/// ];
/// let sizes = resolve_sizes(500.0_f64, specs.len(), |i| specs[i]);
/// assert_eq!(sizes, [100.0, 200.0, 200.0]);
/// ```
pub fn resolve_sizes<S, F>(container_size: S, len: usize, mut spec_of: F) -> Vec<S>
where
    S: Scalar,
    F: FnMut(usize) -> SizeSpec<S>,
{
    let mut sizes = Vec::with_capacity(len);
    let mut bounds = Vec::with_capacity(len);
    let mut fraction_indices: SmallVec<[usize; 8]> = SmallVec::new();
    let mut fixed_total = S::zero();
    let mut fraction_total = S::zero();

    for index in 0..len {
        let spec = spec_of(index);
        let size = match spec.value {
            ItemSize::Fraction(shares) => {
                fraction_indices.push(index);
                fraction_total = fraction_total + shares;
                // Share count stands in until the fraction unit is known.
                shares
            }
            fixed => {
                let extent = fixed.to_extent(container_size).unwrap_or_else(S::zero);
                fixed_total = fixed_total + extent;
                extent
            }
        };
        sizes.push(size);
        bounds.push((
            spec.min.map(|min| min.to_extent(container_size)),
            spec.max.map(|max| max.to_extent(container_size)),
        ));
    }

    if !fraction_indices.is_empty() {
        let unit = fraction_unit(container_size, fixed_total, fraction_total);
        for &index in &fraction_indices {
            sizes[index] = sizes[index] * unit;
        }
    }

    for (size, (min, max)) in sizes.iter_mut().zip(bounds) {
        *size = clamp_size(*size, min, max);
    }
    sizes
}

/// Size of one fraction share given what the fixed items already claimed.
fn fraction_unit<S: Scalar>(container_size: S, fixed_total: S, fraction_total: S) -> S {
    if fraction_total == S::zero() {
        // Every fraction item asked for zero shares.
        log::debug!("fraction items request zero shares; resolving them to zero");
        return S::zero();
    }
    let unit = (container_size - fixed_total) / fraction_total;
    if unit < S::zero() {
        log::debug!(
            "fixed items ({fixed_total:?}) overflow the container ({container_size:?}); \
             fraction unit is {unit:?}"
        );
    }
    unit
}

fn clamp_size<S: Scalar>(size: S, min: Option<S>, max: Option<S>) -> S {
    match (min, max) {
        (Some(min), _) if size < min => min,
        (_, Some(max)) if size > max => max,
        _ => size,
    }
}
