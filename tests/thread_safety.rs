//! The codec holds no shared state, so its public types cross threads freely
//! and independent decodes can run side by side.

use leb128_rs::{BigInt, BigUint, ByteCount, Error, Reader, decode_signed, encode_signed};

const fn assert_send_sync<T: Send + Sync>() {}

const _: () = {
    assert_send_sync::<Reader<'static>>();
    assert_send_sync::<ByteCount>();
    assert_send_sync::<Error>();
};

#[test]
fn reader_moves_to_another_thread() {
    let data = [0xACu8, 0x02, 0x40];
    let mut reader = Reader::new(&data);
    assert_eq!(reader.read_unsigned().unwrap(), BigUint::from(300u32));

    let reader = std::thread::scope(|scope| {
        scope
            .spawn(move || {
                let mut reader = reader;
                assert_eq!(reader.read_signed().unwrap(), BigInt::from(-64));
                reader
            })
            .join()
            .unwrap()
    });
    assert!(reader.is_empty());
}

#[test]
fn concurrent_decodes_share_one_buffer() {
    let values: Vec<BigInt> = (0..16u32).map(|i| -(BigInt::from(5) << (97 * i))).collect();
    let encoded: Vec<Vec<u8>> = values.iter().map(encode_signed).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = encoded
            .iter()
            .map(|bytes| scope.spawn(move || decode_signed(bytes)))
            .collect();
        for (handle, value) in handles.into_iter().zip(&values) {
            assert_eq!(handle.join().unwrap().as_ref(), Ok(value));
        }
    });

    let error: Result<BigInt, Error> =
        std::thread::spawn(|| decode_signed(&[0x80u8])).join().unwrap();
    assert_eq!(error, Err(Error::UnexpectedEof(1)));
}
