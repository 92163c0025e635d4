/// Offset/limit window over an ordered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: u32,
    pub limit: u32,
}

impl Page {
    pub fn new(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }

    /// Build a page from optional request parameters.
    pub fn or_default(offset: Option<u32>, limit: Option<u32>, default_limit: u32) -> Self {
        Self::new(offset.unwrap_or(0), limit.unwrap_or(default_limit))
    }
}
