//! Provide entropy from the operating system.

/// Returns a random `u64` value, or `None` if the platform could not provide one.
pub fn entropy() -> Option<u64> {
    #[cfg(target_arch = "wasm32")]
    {
        let bytes: [u8; 8] = std::array::from_fn(|_| (js_sys::Math::random() * 256.0) as u8);
        Some(u64::from_ne_bytes(bytes))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let mut bytes = [0u8; 8];
        match getrandom::getrandom(&mut bytes) {
            Ok(()) => Some(u64::from_ne_bytes(bytes)),
            Err(err) => {
                splitmix64_log::warning!("failed to read entropy: {err}");
                None
            }
        }
    }
}
