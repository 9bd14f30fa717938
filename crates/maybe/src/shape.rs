//! Capability tags: does a variant carry a payload or not.

/// Payload presence of a variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// No payload: an empty `Maybe`, a payload-less success, or any failure.
    Empty,
    /// Exactly one payload value.
    Valued,
}

/// Implemented by every container so callers can branch on payload presence
/// without matching on the concrete variant set.
pub trait Shaped {
    fn shape(&self) -> Shape;

    #[inline]
    fn is_value_holder(&self) -> bool {
        self.shape() == Shape::Valued
    }

    #[inline]
    fn is_empty_value(&self) -> bool {
        self.shape() == Shape::Empty
    }
}
