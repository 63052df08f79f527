//! Capability probes for the libc primitives the shim depends on.
//!
//! A probe proves only that a symbol links and is callable with the listed
//! argument types on the target toolchain. Return values are unconstrained
//! and always discarded; a probe never reports success or failure.

use std::ffi::c_int;
use std::{mem, ptr};

/// Descriptor that is never open, so descriptor-taking calls fail with
/// `EBADF` instead of touching a real file or socket.
const NO_FD: c_int = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Malloc,
    Free,
    ClockGettime,
    FcntlGetFlags,
    FcntlSetFlags,
    Poll,
    Open,
    Close,
    Recv,
    Send,
    Fstat,
    Read,
}

pub const PRIMITIVES: &[Primitive] = &[
    Primitive::Malloc,
    Primitive::Free,
    Primitive::ClockGettime,
    Primitive::FcntlGetFlags,
    Primitive::FcntlSetFlags,
    Primitive::Poll,
    Primitive::Open,
    Primitive::Close,
    Primitive::Recv,
    Primitive::Send,
    Primitive::Fstat,
    Primitive::Read,
];

impl Primitive {
    /// libc symbol exercised by this probe.
    pub fn symbol(self) -> &'static str {
        match self {
            Primitive::Malloc => "malloc",
            Primitive::Free => "free",
            Primitive::ClockGettime => "clock_gettime",
            Primitive::FcntlGetFlags | Primitive::FcntlSetFlags => "fcntl",
            Primitive::Poll => "poll",
            Primitive::Open => "open",
            Primitive::Close => "close",
            Primitive::Recv => "recv",
            Primitive::Send => "send",
            Primitive::Fstat => "fstat",
            Primitive::Read => "read",
        }
    }

    /// Invoke the primitive once with harmless arguments.
    pub fn touch(self) {
        match self {
            Primitive::Malloc => {
                // SAFETY: a zero-byte allocation is freed immediately and never read.
                unsafe {
                    let p = libc::malloc(0);
                    libc::free(p);
                }
            }
            Primitive::Free => {
                // SAFETY: freeing null is a no-op.
                unsafe { libc::free(ptr::null_mut()) };
            }
            Primitive::ClockGettime => {
                // SAFETY: `ts` is a valid, writable timespec.
                unsafe {
                    let mut ts: libc::timespec = mem::zeroed();
                    let _ = libc::clock_gettime(libc::CLOCK_REALTIME, &mut ts);
                }
            }
            Primitive::FcntlGetFlags => {
                // SAFETY: F_GETFL takes no pointer argument.
                let _ = unsafe { libc::fcntl(NO_FD, libc::F_GETFL) };
            }
            Primitive::FcntlSetFlags => {
                // SAFETY: F_SETFL takes an integer argument.
                let _ = unsafe { libc::fcntl(NO_FD, libc::F_SETFL, 0) };
            }
            Primitive::Poll => {
                // SAFETY: zero descriptors and a zero timeout; the array is never read.
                let _ = unsafe { libc::poll(ptr::null_mut(), 0, 0) };
            }
            Primitive::Open => {
                // SAFETY: the path is a valid NUL-terminated string.
                let _ = unsafe { libc::open(c"".as_ptr(), libc::O_RDONLY) };
            }
            Primitive::Close => {
                // SAFETY: closing a descriptor that is never open.
                let _ = unsafe { libc::close(NO_FD) };
            }
            Primitive::Recv => {
                // SAFETY: zero-length buffer; nothing is written through null.
                let _ = unsafe { libc::recv(NO_FD, ptr::null_mut(), 0, 0) };
            }
            Primitive::Send => {
                // SAFETY: zero-length buffer; nothing is read through null.
                let _ = unsafe { libc::send(NO_FD, ptr::null(), 0, 0) };
            }
            Primitive::Fstat => {
                // SAFETY: `st` is a valid, writable stat buffer.
                unsafe {
                    let mut st: libc::stat = mem::zeroed();
                    let _ = libc::fstat(NO_FD, &mut st);
                }
            }
            Primitive::Read => {
                // SAFETY: zero-length read; nothing is written through null.
                let _ = unsafe { libc::read(NO_FD, ptr::null_mut(), 0) };
            }
        }
    }
}

/// Touch every primitive in declaration order.
pub fn exercise() {
    for primitive in PRIMITIVES {
        primitive.touch();
    }
}
