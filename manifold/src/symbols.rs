//! Engine symbol enumeration.
//!
//! The engine exposes its constants — protocol identifiers, option names,
//! error codes, version fields — as a name/value table. The table is read
//! once, on first use.

use std::ffi::CStr;

use hashbrown::HashMap;
use libc::c_int;
use manifold_sys as sys;
use once_cell::sync::Lazy;

static SYMBOLS: Lazy<HashMap<String, i32>> = Lazy::new(|| {
    let mut map = HashMap::new();
    let mut value: c_int = 0;
    for index in 0.. {
        let name = unsafe { sys::nn_symbol(index, &mut value) };
        if name.is_null() {
            break;
        }
        let name = unsafe { CStr::from_ptr(name) }.to_string_lossy().into_owned();
        map.insert(name, value);
    }
    map
});

/// Looks up the engine's value for a named constant, e.g. `"NN_PAIR"`.
#[must_use]
pub fn symbol(name: &str) -> Option<i32> {
    SYMBOLS.get(name).copied()
}

/// The engine's version triple (current, revision, age) as reported by its
/// symbol table, or `None` when the engine does not publish it.
#[must_use]
pub fn version() -> Option<(i32, i32, i32)> {
    Some((
        symbol("NN_VERSION_CURRENT")?,
        symbol("NN_VERSION_REVISION")?,
        symbol("NN_VERSION_AGE")?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_symbols_resolve() {
        assert_eq!(symbol("NN_PAIR"), Some(sys::NN_PAIR));
        assert_eq!(symbol("NN_LINGER"), Some(sys::NN_LINGER));
        assert_eq!(symbol("NN_POLLIN"), Some(i32::from(sys::NN_POLLIN)));
        assert_eq!(symbol("no-such-symbol"), None);
    }
}
