//! Merge callback invoked whenever one entry absorbs another.

/// Folds the payload of a discarded entry into the entry that survives it.
///
/// The same `keep` entry may be passed many times as it absorbs more
/// neighbours, so implementations must accumulate rather than overwrite.
pub trait Merge<E> {
    fn merge(&mut self, keep: &mut E, delete: &mut E);
}

impl<E, F> Merge<E> for F
where
    F: FnMut(&mut E, &mut E),
{
    fn merge(&mut self, keep: &mut E, delete: &mut E) {
        self(keep, delete)
    }
}

/// Merge that leaves both entries untouched.
pub fn no_merge<E>(_keep: &mut E, _delete: &mut E) {}

/// Run `merge` on two distinct entries of `entries`.
pub(crate) fn merge_at<E, M: Merge<E>>(
    merge: &mut M,
    entries: &mut [E],
    keep: usize,
    delete: usize,
) {
    assert_ne!(keep, delete, "an entry cannot absorb itself");
    let (keep, delete) = if keep < delete {
        let (lo, hi) = entries.split_at_mut(delete);
        (&mut lo[keep], &mut hi[0])
    } else {
        let (lo, hi) = entries.split_at_mut(keep);
        (&mut hi[0], &mut lo[delete])
    };
    merge.merge(keep, delete);
}
