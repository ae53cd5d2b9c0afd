use std::{error::Error, io};

use nibble_bit_buf::{BitStreamReader, BitStreamWriter, FileError};

const FIELDS: [(u32, u64); 6] = [
    (3, 0b101),
    (5, 0b10011),
    (12, 0xABC),
    (1, 1),
    (33, 0x1_2345_6789),
    (64, u64::MAX - 1),
];

#[test]
fn fields_round_trip() {
    let mut writer = BitStreamWriter::with_size(1);
    for (length, value) in FIELDS {
        writer.put(length, value);
    }
    writer.flush();

    let mut reader = BitStreamReader::new(writer.view());
    for (length, value) in FIELDS {
        assert_eq!(reader.get(length), value, "{length} bit field");
    }
}

#[test]
fn signed_round_trip() {
    let values = [(4, -8), (4, 7), (9, -200), (1, -1), (64, i64::MIN)];

    let mut writer = BitStreamWriter::with_size(4);
    for (length, value) in values {
        writer.put_signed(length, value);
    }

    let mut reader = BitStreamReader::new(writer.buffer());
    for (length, value) in values {
        assert_eq!(reader.get_signed(length), value);
    }
}

#[test]
fn file_round_trip() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("fields.bin");

    let mut writer = BitStreamWriter::with_size(1);
    for (length, value) in FIELDS {
        writer.put(length, value);
    }
    writer.flush();
    writer.write_to_file(&path)?;

    let mut reader = BitStreamReader::from_file(&path)?;
    assert_eq!(reader.size(), writer.last_byte_position());
    for (length, value) in FIELDS {
        assert_eq!(reader.get(length), value);
    }

    Ok(())
}

#[test]
fn missing_file() -> io::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("missing.bin");

    match BitStreamReader::from_file(&path) {
        Err(err @ FileError::Read { .. }) => {
            assert_eq!(err.path(), path);
            assert_eq!(err.kind(), io::ErrorKind::NotFound);
        }
        other => panic!("expected read error, got {other:?}"),
    }

    Ok(())
}

#[test]
fn unwritable_file() -> io::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("missing_dir").join("out.bin");

    let mut writer = BitStreamWriter::with_size(1);
    writer.put(8, 0xAB);

    match writer.write_to_file(&path) {
        Err(err @ FileError::Write { .. }) => {
            assert_eq!(err.path(), path);
            assert_eq!(err.kind(), io::ErrorKind::NotFound);
        }
        other => panic!("expected write error, got {other:?}"),
    }

    Ok(())
}

#[test]
fn file_spans_skipped_bytes() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("sparse.bin");

    let mut writer = BitStreamWriter::with_size(1);
    writer.put(8, 0xAB);
    writer.set_position(20);
    assert_eq!(writer.view(), &[0xAB]);

    writer.write_to_file(&path)?;

    let reader = BitStreamReader::from_file(&path)?;
    assert_eq!(reader.buffer(), &[0xAB, 0x00, 0x00]);

    Ok(())
}
