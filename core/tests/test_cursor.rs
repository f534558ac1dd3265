// Cursor bounds: the read offset never leaves [0, len], failed reads do not
// move it, and length prefixes outside u32 are refused on write.

#[cfg(test)]
mod tests {
    use obi_core::cursor::{ReadCursor, WriteCursor};
    use obi_core::CodecError;

    #[test]
    fn read_exact_advances() {
        let buf = [1u8, 2, 3, 4, 5];
        let mut r = ReadCursor::new(&buf);

        assert_eq!(r.read_exact(2).unwrap(), &[1, 2]);
        assert_eq!(r.position(), 2);
        assert_eq!(r.remaining(), 3);
        assert_eq!(r.read_exact(3).unwrap(), &[3, 4, 5]);
        assert!(r.is_empty());
    }

    #[test]
    fn short_read_fails_and_does_not_move() {
        let buf = [1u8, 2, 3];
        let mut r = ReadCursor::new(&buf);
        r.read_u8().unwrap();

        let err = r.read_u32().unwrap_err();
        assert_eq!(err, CodecError::UnexpectedEndOfInput { need: 4, have: 2 });
        assert_eq!(r.position(), 1);
        assert_eq!(r.read_u16().unwrap(), 0x0302);
    }

    #[test]
    fn zero_length_read_at_end_is_fine() {
        let mut r = ReadCursor::new(&[]);
        assert_eq!(r.read_exact(0).unwrap(), &[] as &[u8]);
        assert!(r.read_u8().is_err());
    }

    #[test]
    fn typed_reads_are_little_endian() {
        let buf = [0x85, 0xff, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12];
        let mut r = ReadCursor::new(&buf);
        assert_eq!(r.read_i16().unwrap(), -123);
        assert_eq!(r.read_u16().unwrap(), 0x1234);
        assert_eq!(r.read_u32().unwrap(), 0x1234_5678);
    }

    #[test]
    fn read_prefixed_borrows_payload() {
        let buf = [0x03, 0x00, 0x00, 0x00, b'a', b'b', b'c', 0xee];
        let mut r = ReadCursor::new(&buf);
        assert_eq!(r.read_prefixed().unwrap(), b"abc");
        assert_eq!(r.remaining(), 1);
    }

    #[test]
    fn capacity_hint_is_clamped_by_input() {
        let buf = [0u8; 16];
        let r = ReadCursor::new(&buf);
        assert_eq!(r.capacity_hint(u32::MAX as usize, 4), 4);
        assert_eq!(r.capacity_hint(2, 4), 2);
        assert_eq!(r.capacity_hint(100, 0), 16);
    }

    #[test]
    fn writer_roundtrips_through_reader() {
        let mut w = WriteCursor::with_capacity(32);
        w.write_u8(0xab);
        w.write_i16(-2);
        w.write_u32(7);
        w.write_i64(i64::MIN);
        w.write_prefixed(b"xyz").unwrap();
        assert_eq!(w.len(), 1 + 2 + 4 + 8 + 4 + 3);

        let bytes = w.into_bytes();
        let mut r = ReadCursor::new(&bytes);
        assert_eq!(r.read_u8().unwrap(), 0xab);
        assert_eq!(r.read_i16().unwrap(), -2);
        assert_eq!(r.read_u32().unwrap(), 7);
        assert_eq!(r.read_i64().unwrap(), i64::MIN);
        assert_eq!(r.read_prefixed().unwrap(), b"xyz");
        assert!(r.is_empty());
    }

    #[test]
    fn length_prefix_must_fit_u32() {
        let mut w = WriteCursor::new();
        w.write_len(u32::MAX as usize).unwrap();
        assert_eq!(w.as_slice(), &[0xff, 0xff, 0xff, 0xff]);

        #[cfg(target_pointer_width = "64")]
        {
            let too_long = u32::MAX as usize + 1;
            assert_eq!(
                w.write_len(too_long).unwrap_err(),
                CodecError::LengthOverflow { len: too_long }
            );
            assert_eq!(w.len(), 4);
        }
    }
}
