//! Raw FFI declarations for the nanomsg scalability-protocols library.
//!
//! This crate contains no logic: only the C function surface, the constants
//! derived from the public headers, and the `nn_pollfd` layout. Use the
//! `manifold` crate for the safe API.

#![no_std]
#![allow(non_camel_case_types)]
#![forbid(improper_ctypes)]

use libc::{c_char, c_int, c_short, c_void, size_t};

/// Standard scalability-protocols address family.
pub const AF_SP: c_int = 1;
/// Raw address family; sockets skip end-to-end protocol processing.
pub const AF_SP_RAW: c_int = 2;

/// Passed as the receive length to hand buffer ownership to the caller.
pub const NN_MSG: size_t = usize::MAX;

/// Non-blocking send/receive flag.
pub const NN_DONTWAIT: c_int = 1;

// Protocol families.
pub const NN_PROTO_PAIR: c_int = 1;
pub const NN_PROTO_PUBSUB: c_int = 2;
pub const NN_PROTO_REQREP: c_int = 3;
pub const NN_PROTO_PIPELINE: c_int = 5;
pub const NN_PROTO_SURVEY: c_int = 6;
pub const NN_PROTO_BUS: c_int = 7;

// Protocol identifiers, `family * 16 + role`.
pub const NN_PAIR: c_int = NN_PROTO_PAIR * 16;
pub const NN_PUB: c_int = NN_PROTO_PUBSUB * 16;
pub const NN_SUB: c_int = NN_PROTO_PUBSUB * 16 + 1;
pub const NN_REQ: c_int = NN_PROTO_REQREP * 16;
pub const NN_REP: c_int = NN_PROTO_REQREP * 16 + 1;
pub const NN_PUSH: c_int = NN_PROTO_PIPELINE * 16;
pub const NN_PULL: c_int = NN_PROTO_PIPELINE * 16 + 1;
pub const NN_SURVEYOR: c_int = NN_PROTO_SURVEY * 16 + 2;
pub const NN_RESPONDENT: c_int = NN_PROTO_SURVEY * 16 + 3;
pub const NN_BUS: c_int = NN_PROTO_BUS * 16;

// Option scopes. Transport scopes are negative, protocol scopes reuse the
// protocol identifier.
pub const NN_SOL_SOCKET: c_int = 0;
pub const NN_INPROC: c_int = -1;
pub const NN_IPC: c_int = -2;
pub const NN_TCP: c_int = -3;
pub const NN_WS: c_int = -4;

// Socket-level options.
pub const NN_LINGER: c_int = 1;
pub const NN_SNDBUF: c_int = 2;
pub const NN_RCVBUF: c_int = 3;
pub const NN_SNDTIMEO: c_int = 4;
pub const NN_RCVTIMEO: c_int = 5;
pub const NN_RECONNECT_IVL: c_int = 6;
pub const NN_RECONNECT_IVL_MAX: c_int = 7;
pub const NN_SNDPRIO: c_int = 8;
pub const NN_RCVPRIO: c_int = 9;
pub const NN_SNDFD: c_int = 10;
pub const NN_RCVFD: c_int = 11;
pub const NN_DOMAIN: c_int = 12;
pub const NN_PROTOCOL: c_int = 13;
pub const NN_IPV4ONLY: c_int = 14;
pub const NN_SOCKET_NAME: c_int = 15;
pub const NN_RCVMAXSIZE: c_int = 16;
pub const NN_MAXTTL: c_int = 17;

// Protocol-scope options.
pub const NN_SUB_SUBSCRIBE: c_int = 1;
pub const NN_SUB_UNSUBSCRIBE: c_int = 2;
pub const NN_REQ_RESEND_IVL: c_int = 1;
pub const NN_SURVEYOR_DEADLINE: c_int = 1;

// Transport-scope options.
pub const NN_TCP_NODELAY: c_int = 1;

// Readiness event bits.
pub const NN_POLLIN: c_short = 1;
pub const NN_POLLOUT: c_short = 2;

/// Base for error codes that have no OS-level equivalent.
pub const NN_HAUSNUMERO: c_int = 156_384_712;
/// The library is terminating process-wide.
pub const ETERM: c_int = NN_HAUSNUMERO + 53;
/// Operation not supported in the socket's current protocol state.
pub const EFSM: c_int = NN_HAUSNUMERO + 54;

/// One entry of a multiplexed readiness wait, mirrors `struct nn_pollfd`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct nn_pollfd {
    pub fd: c_int,
    pub events: c_short,
    pub revents: c_short,
}

extern "C" {
    pub fn nn_socket(domain: c_int, protocol: c_int) -> c_int;
    pub fn nn_close(socket: c_int) -> c_int;

    pub fn nn_bind(socket: c_int, addr: *const c_char) -> c_int;
    pub fn nn_connect(socket: c_int, addr: *const c_char) -> c_int;
    pub fn nn_shutdown(socket: c_int, how: c_int) -> c_int;

    pub fn nn_send(socket: c_int, buf: *const c_void, len: size_t, flags: c_int) -> c_int;
    pub fn nn_recv(socket: c_int, buf: *mut c_void, len: size_t, flags: c_int) -> c_int;
    pub fn nn_allocmsg(size: size_t, ty: c_int) -> *mut c_void;
    pub fn nn_freemsg(msg: *mut c_void) -> c_int;

    pub fn nn_getsockopt(
        socket: c_int,
        level: c_int,
        option: c_int,
        optval: *mut c_void,
        optvallen: *mut size_t,
    ) -> c_int;
    pub fn nn_setsockopt(
        socket: c_int,
        level: c_int,
        option: c_int,
        optval: *const c_void,
        optvallen: size_t,
    ) -> c_int;

    pub fn nn_poll(fds: *mut nn_pollfd, nfds: c_int, timeout: c_int) -> c_int;

    pub fn nn_errno() -> c_int;
    pub fn nn_strerror(errnum: c_int) -> *const c_char;
    pub fn nn_symbol(index: c_int, value: *mut c_int) -> *const c_char;
    pub fn nn_term();
}
