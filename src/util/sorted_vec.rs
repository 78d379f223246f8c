use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    ops::{Deref, Index},
    slice::SliceIndex,
};

/// A [`Vec`] whose elements are guaranteed to be in ascending order.
#[derive(Clone, PartialEq, Eq)]
pub struct SortedVec<T> {
    inner: Vec<T>,
}

impl<T: Ord> SortedVec<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Vec::with_capacity(capacity),
        }
    }

    /// Same as [`slice::binary_search`].
    #[inline]
    pub fn find(&self, value: &T) -> Result<usize, usize> {
        self.inner.binary_search(value)
    }

    /// Push a new value into the sorted list.
    /// If there is already an element that matches the new value,
    /// the old element will be replaced.
    pub fn push(&mut self, value: T) {
        match self.find(&value) {
            Ok(i) => self.inner[i] = value,
            Err(i) if i == self.inner.len() => self.inner.push(value),
            Err(i) => self.inner.insert(i, value),
        }
    }

    /// Keep only the elements for which `f` returns `true`, visiting them
    /// in order.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, f: F) {
        self.inner.retain(f);
    }
}

impl<T> Deref for SortedVec<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        <Vec<T> as Deref>::deref(&self.inner)
    }
}

impl<T, I> Index<I> for SortedVec<T>
where
    I: SliceIndex<[T]>,
{
    type Output = <I as SliceIndex<[T]>>::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        <Vec<T> as Index<I>>::index(&self.inner, index)
    }
}

impl<T: Debug> Debug for SortedVec<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        <Vec<T> as Debug>::fmt(&self.inner, f)
    }
}

impl<T> Default for SortedVec<T> {
    #[inline]
    fn default() -> Self {
        Self { inner: Vec::new() }
    }
}

#[cfg(test)]
mod tests {
    use super::SortedVec;

    #[test]
    fn sorts_on_push() {
        let mut v = SortedVec::default();

        v.push(42);
        v.push(13);
        v.push(20);
        v.push(0);

        assert_eq!(&v[..], &[0_i32, 13, 20, 42]);
    }

    #[test]
    fn replaces_duplicates() {
        let mut v = SortedVec::with_capacity(2);

        v.push(7_u8);
        v.push(7);

        assert_eq!(v.len(), 1);
    }

    #[test]
    fn retain_keeps_order() {
        let mut v = SortedVec::default();

        for i in [5_usize, 1, 3, 2, 4] {
            v.push(i);
        }

        v.retain(|&i| i % 2 == 1);

        assert_eq!(&v[..], &[1, 3, 5]);
    }
}
