//! Scoped buffers with pluggable allocation accounting.
//!
//! Every intermediate buffer an operation needs (UTF-16 paths handed to the OS,
//! UTF-16 output from the OS, UTF-8 output for the caller) is a [`Buffer`].
//! Reservation is fallible (`Vec::try_reserve_exact`), and the owning
//! [`BufferAllocator`] is told when the bytes come back, so a custom allocator
//! can both inject failures and prove that nothing outlives its operation.

use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut};

use thiserror::Error;

/// Raised when a buffer could not be reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("could not allocate {bytes} bytes")]
pub struct AllocError {
    pub bytes: usize,
}

/// Admission and release hooks around every buffer reservation.
///
/// `grant` runs before the heap is touched; returning `false` fails the
/// reservation. `release` runs exactly once for every granted reservation,
/// either when the buffer drops or when its contents are handed to the caller.
pub trait BufferAllocator: fmt::Debug + Send + Sync {
    fn grant(&self, bytes: usize) -> bool {
        let _ = bytes;
        true
    }

    fn release(&self, bytes: usize) {
        let _ = bytes;
    }
}

/// Plain process heap, no accounting.
#[derive(Debug, Default, Clone, Copy)]
pub struct Heap;

impl BufferAllocator for Heap {}

/// Zero-initialised buffer owned by a single operation.
pub struct Buffer<'a, T: Copy + Default> {
    data: Vec<T>,
    bytes: usize,
    alloc: &'a dyn BufferAllocator,
}

impl<'a, T: Copy + Default> Buffer<'a, T> {
    /// Reserve exactly `len` elements.
    pub fn zeroed(alloc: &'a dyn BufferAllocator, len: usize) -> Result<Self, AllocError> {
        let bytes = len
            .checked_mul(mem::size_of::<T>())
            .ok_or(AllocError { bytes: usize::MAX })?;
        if !alloc.grant(bytes) {
            return Err(AllocError { bytes });
        }
        let mut data = Vec::new();
        if data.try_reserve_exact(len).is_err() {
            alloc.release(bytes);
            return Err(AllocError { bytes });
        }
        data.resize(len, T::default());
        Ok(Self { data, bytes, alloc })
    }

    /// Hand the contents to the caller; the reservation is released here.
    pub fn into_vec(mut self) -> Vec<T> {
        mem::take(&mut self.data)
    }
}

impl<T: Copy + Default> Drop for Buffer<'_, T> {
    fn drop(&mut self) {
        self.alloc.release(self.bytes);
    }
}

impl<T: Copy + Default> Deref for Buffer<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T: Copy + Default> DerefMut for Buffer<'_, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: Copy + Default + fmt::Debug> fmt::Debug for Buffer<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("len", &self.data.len())
            .field("bytes", &self.bytes)
            .finish()
    }
}
