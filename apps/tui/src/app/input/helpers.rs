/// Moves a list cursor up, wrapping to the last entry.
pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    match (index, len) {
        (_, 0) => 0,
        (0, len) => len - 1,
        (index, len) if index >= len => len - 1,
        (index, _) => index - 1,
    }
}

/// Moves a list cursor down, wrapping to the first entry.
pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}
