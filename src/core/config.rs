/// Engine-wide tunables.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Hard bound on an encoded payload string, in bytes.
    pub max_payload_len: usize,
    /// Default `lin_search_iter` handed to `find_elem_larger_offset`
    /// when the caller doesn't override it per call.
    pub default_lin_search_iter: usize,
    /// Initial capacity new `ElementSpanBuffer`s are allocated with before
    /// doubling kicks in.
    pub initial_buffer_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_payload_len: 1024,
            default_lin_search_iter: 4,
            initial_buffer_capacity: 16,
        }
    }
}
