//! codec/macros.rs
//! Declarative impls for user records and named integer aliases.

/// Implement the OBI traits for a struct as a record.
///
/// Fields are listed in wire order with their types. The list must name
/// every field of the struct (the generated struct expression enforces it).
///
/// ```
/// use obi_core::{impl_obi_record, codec::{decode, encode}};
///
/// #[derive(Debug, PartialEq)]
/// struct Quote { symbol: String, px: u64 }
/// impl_obi_record!(Quote { symbol: String, px: u64 });
///
/// let q = Quote { symbol: "BTC".into(), px: 9000 };
/// let bytes = encode(&q).unwrap();
/// assert_eq!(decode::<Quote>(&bytes).unwrap(), q);
/// ```
///
/// The byte stream carries no field names or counts. A reader must use the
/// exact field order, count and per-field types the writer used; a
/// mismatch is not detected and decodes to wrong values (or fails later
/// with a truncation/trailing-bytes error).
#[macro_export]
macro_rules! impl_obi_record {
    ($ty:ident { $($field:ident : $fty:ty),* $(,)? }) => {
        impl $crate::codec::ObiSchema for $ty {
            fn shape() -> $crate::shape::Shape {
                $crate::shape::Shape::record(::std::vec![
                    $($crate::shape::Field::new(
                        stringify!($field),
                        <$fty as $crate::codec::ObiSchema>::shape(),
                    )),*
                ])
            }
        }

        impl $crate::codec::ObiEncode for $ty {
            #[allow(unused_variables)]
            fn encode_to(&self, w: &mut $crate::cursor::WriteCursor) -> $crate::Result<()> {
                $(<$fty as $crate::codec::ObiEncode>::encode_to(&self.$field, w)?;)*
                Ok(())
            }
        }

        impl $crate::codec::ObiDecode for $ty {
            const MIN_LEN: usize = 0 $(+ <$fty as $crate::codec::ObiDecode>::MIN_LEN)*;

            #[allow(unused_variables)]
            fn decode_from(r: &mut $crate::cursor::ReadCursor<'_>) -> $crate::Result<Self> {
                // Struct expression fields evaluate in source order.
                Ok($ty {
                    $($field: <$fty as $crate::codec::ObiDecode>::decode_from(r)?,)*
                })
            }
        }
    };
}

/// Implement the OBI traits for a single-field tuple struct by delegating
/// to the wrapped type, so `struct Id(u8)` encodes exactly like `u8`.
#[macro_export]
macro_rules! impl_obi_alias {
    ($ty:ident => $inner:ty) => {
        impl $crate::codec::ObiSchema for $ty {
            fn shape() -> $crate::shape::Shape {
                <$inner as $crate::codec::ObiSchema>::shape()
            }
        }

        impl $crate::codec::ObiEncode for $ty {
            #[inline]
            fn encode_to(&self, w: &mut $crate::cursor::WriteCursor) -> $crate::Result<()> {
                <$inner as $crate::codec::ObiEncode>::encode_to(&self.0, w)
            }
        }

        impl $crate::codec::ObiDecode for $ty {
            const MIN_LEN: usize = <$inner as $crate::codec::ObiDecode>::MIN_LEN;

            #[inline]
            fn decode_from(r: &mut $crate::cursor::ReadCursor<'_>) -> $crate::Result<Self> {
                Ok($ty(<$inner as $crate::codec::ObiDecode>::decode_from(r)?))
            }
        }
    };
}
