use crate::ProductSnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A product page was fetched and parsed successfully.
    SnapshotTaken(ProductSnapshot),
    /// Fallback for placeholder wiring.
    NoOp,
}
