//! Branch hints for the hot paths of bit-level I/O.

/// Marks the calling code path as rarely taken.
///
/// Stands in for [`std::hint::cold_path`] until that is stabilized.
#[cold]
#[inline(always)]
pub fn cold_path() {}

/// Passes `cond` through while hinting that it is usually `false`.
#[inline(always)]
pub fn unlikely(cond: bool) -> bool {
    if cond {
        cold_path();
    }
    cond
}
