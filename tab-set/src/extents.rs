/// Rendered widths reported by the presentation layer.
///
/// `tab` is the width of the last rendered tab header and stands in for every
/// header, which holds as long as headers are of similar width.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Extents {
    pub container: u32,
    pub tab: u32,
}

impl Extents {
    #[must_use]
    pub const fn new(container: u32, tab: u32) -> Self {
        Self { container, tab }
    }

    /// `true` when `count` headers do not fit into the container.
    #[must_use]
    pub fn overflows(&self, count: usize) -> bool {
        let count = u64::try_from(count).unwrap_or(u64::MAX);
        count.saturating_mul(self.tab.into()) > self.container.into()
    }
}
