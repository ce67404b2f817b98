//! Received message buffers.
//!
//! A receive hands back memory allocated and owned by the engine. [`Message`]
//! aliases that memory without copying and releases it exactly once, when the
//! wrapper is dropped. There is no explicit free operation and no `Clone`:
//! the destructor is the only release path, which rules out double-frees by
//! construction. Conversions that need an independently owned value
//! (`to_vec`, `Bytes`) copy the bytes out and leave the release with the
//! wrapper.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::ptr::NonNull;
use std::slice;

use bytes::Bytes;
use manifold_sys as sys;

/// An immutable byte sequence received from a socket, backed by
/// engine-owned memory.
///
/// Dereferences to `[u8]`; the underlying buffer is freed when the
/// `Message` goes out of scope.
pub struct Message {
    ptr: NonNull<u8>,
    len: usize,
}

// The view is read-only and the engine's free-buffer call is not bound to
// the receiving thread.
unsafe impl Send for Message {}
unsafe impl Sync for Message {}

impl Message {
    /// Takes ownership of a buffer returned by the engine's receive call.
    ///
    /// # Safety
    ///
    /// `ptr` must be a live engine-allocated message with at least `len`
    /// readable bytes, and no other wrapper may own it.
    pub(crate) unsafe fn from_raw(ptr: *mut u8, len: usize) -> Self {
        debug_assert!(!ptr.is_null());
        Self {
            ptr: NonNull::new_unchecked(ptr),
            len,
        }
    }

    /// Length of the message in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the message is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The message body as a byte slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Copies the message body into an owned vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_slice().to_vec()
    }
}

impl Drop for Message {
    fn drop(&mut self) {
        let rc = unsafe { sys::nn_freemsg(self.ptr.as_ptr().cast()) };
        if rc != 0 {
            tracing::debug!(len = self.len, "engine refused to free a message buffer");
        }
    }
}

impl Deref for Message {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for Message {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl Borrow<[u8]> for Message {
    fn borrow(&self) -> &[u8] {
        self.as_slice()
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message").field("len", &self.len).finish()
    }
}

impl From<Message> for Vec<u8> {
    fn from(msg: Message) -> Self {
        msg.to_vec()
    }
}

impl From<Message> for Bytes {
    fn from(msg: Message) -> Self {
        Bytes::copy_from_slice(&msg)
    }
}
