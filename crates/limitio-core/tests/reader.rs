#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::io::{self, Cursor, Read};

use limitio_core::{is_threshold_exceeded, LimitReader};

const CORPUS: &[u8] = b"hello world!";

/// Source that counts how often it is asked for data.
struct Counting<'a> {
    data: &'a [u8],
    calls: usize,
}

impl Read for Counting<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.calls += 1;
        self.data.read(buf)
    }
}

/// Source that hands out one byte per call.
struct Trickle<'a>(&'a [u8]);

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(1);
        self.0.read(&mut buf[..n])
    }
}

struct Failing;

impl Read for Failing {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))
    }
}

#[test]
fn exhausted_reader_never_touches_the_source() {
    for permissive in [false, true] {
        let mut src = Counting {
            data: CORPUS,
            calls: 0,
        };
        let mut buf = [0u8; 12];
        {
            let mut r = LimitReader::new(&mut src, 0, permissive);
            for _ in 0..3 {
                let t = r.read_bounded(&mut buf);
                assert_eq!(t.n, 0);
                assert_eq!(t.is_eof(), permissive);
                assert_eq!(t.is_threshold_exceeded(), !permissive);
            }
        }
        assert_eq!(src.calls, 0);
        assert_eq!(buf, [0u8; 12]);
    }
}

#[test]
fn boundary_read_carries_the_signal() {
    let mut buf = [0u8; 12];

    let mut r = LimitReader::new(CORPUS, 1, false);
    let t = r.read_bounded(&mut buf);
    assert_eq!(t.n, 1);
    assert_eq!(&buf[..1], b"h");
    assert!(t.is_threshold_exceeded());

    let mut r = LimitReader::new(CORPUS, 1, true);
    let t = r.read_bounded(&mut buf);
    assert_eq!(t.n, 1);
    assert!(t.is_eof());
}

#[test]
fn io_read_delivers_data_before_the_signal() {
    let mut buf = [0u8; 12];
    let mut r = LimitReader::new(CORPUS, 12, false);
    assert_eq!(r.read(&mut buf).unwrap(), 12);
    assert_eq!(&buf, CORPUS);
    for _ in 0..2 {
        assert!(is_threshold_exceeded(&r.read(&mut buf).unwrap_err()));
    }
}

#[test]
fn short_reads_defer_the_signal() {
    let mut buf = [0u8; 12];
    let mut r = LimitReader::new(Trickle(CORPUS), 3, false);

    for expected in [b'h', b'e'] {
        let t = r.read_bounded(&mut buf);
        assert_eq!(t.n, 1);
        assert!(t.end.is_none());
        assert_eq!(buf[0], expected);
    }
    let t = r.read_bounded(&mut buf);
    assert_eq!(t.n, 1);
    assert_eq!(buf[0], b'l');
    assert!(t.is_threshold_exceeded());
    assert_eq!(r.bytes_read(), 3);
}

#[test]
fn small_buffer_filled_below_limit_has_no_signal() {
    let mut buf = [0u8; 4];
    let mut r = LimitReader::new(CORPUS, 10, true);
    let t = r.read_bounded(&mut buf);
    assert_eq!(t.n, 4);
    assert!(t.end.is_none());
    assert_eq!(r.remaining(), 6);
}

#[test]
fn genuine_eof_below_limit_is_passed_through() {
    let mut buf = [0u8; 12];
    let mut r = LimitReader::new(&b"hi"[..], 100, false);
    assert_eq!(r.read_bounded(&mut buf).n, 2);
    let t = r.read_bounded(&mut buf);
    assert_eq!(t.n, 0);
    assert!(t.is_eof());
    assert_eq!(r.read(&mut buf).unwrap(), 0);
}

#[test]
fn source_error_is_propagated_unchanged() {
    for permissive in [false, true] {
        let mut buf = [0u8; 12];
        let mut r = LimitReader::new(Failing, 5, permissive);
        let err = r.read(&mut buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::ConnectionReset);
        assert!(!is_threshold_exceeded(&err));
        assert_eq!(r.bytes_read(), 0);
    }
}

#[test]
fn empty_buffer_reads_nothing() {
    let mut r = LimitReader::new(CORPUS, 5, false);
    let t = r.read_bounded(&mut []);
    assert_eq!(t.n, 0);
    assert!(t.end.is_none());
    assert_eq!(r.remaining(), 5);
}

#[test]
fn read_to_end_stops_at_the_limit() {
    let mut out = Vec::new();
    let mut r = LimitReader::new(Cursor::new(CORPUS), 5, true);
    assert_eq!(r.read_to_end(&mut out).unwrap(), 5);
    assert_eq!(out, b"hello");
    assert_eq!(r.into_inner().position(), 5);

    let mut out = Vec::new();
    let mut r = LimitReader::new(Cursor::new(CORPUS), 5, false);
    assert!(is_threshold_exceeded(&r.read_to_end(&mut out).unwrap_err()));
    assert_eq!(out, b"hello");
    assert!(!r.is_permissive());
    assert_eq!(r.limit(), 5);
    assert_eq!(r.get_ref().position(), 5);
}
