use crate::error::Result;

/// Decode a domain value from its wire entity.
pub trait FromWire: Sized {
    type Wire;

    fn from_wire(wire: Self::Wire) -> Result<Self>;
}

/// Encode a domain value into its wire entity.
///
/// Encoding cannot fail for a value that passed domain validation. A value
/// that somehow violates its invariants is a bug upstream, and encoding it
/// panics rather than producing wire data the peer would misread.
pub trait ToWire {
    type Wire;

    fn to_wire(&self) -> Self::Wire;
}

pub fn decode<T: FromWire>(wire: T::Wire) -> Result<T> {
    T::from_wire(wire)
}

pub fn encode<T: ToWire>(value: &T) -> T::Wire {
    value.to_wire()
}

/// Decode every element in order, stopping at the first failure.
pub fn decode_list<T: FromWire>(wires: impl IntoIterator<Item = T::Wire>) -> Result<Vec<T>> {
    wires.into_iter().map(T::from_wire).collect()
}

pub fn encode_list<'a, T>(values: impl IntoIterator<Item = &'a T>) -> Vec<T::Wire>
where
    T: ToWire + 'a,
{
    values.into_iter().map(ToWire::to_wire).collect()
}
