use super::{Delimited, ErrorKind, IStr, Range, Split, B};

#[test]
fn test_lines() {
    let mut input = IStr::new(b"1 2\n-4 5\n");
    assert_eq!(input.line::<(u32, u32)>().unwrap(), (1, 2));
    assert_eq!(input.line::<(i64, i64)>().unwrap(), (-4, 5));
    assert!(input.try_line::<u32>().unwrap().is_none());
    assert!(input.is_empty());
}

#[test]
fn test_line_strips_carriage_return() {
    let mut input = IStr::new(b"ab\r\ncd");
    assert_eq!(input.line::<&str>().unwrap(), "ab");
    assert_eq!(input.line::<&str>().unwrap(), "cd");
    assert!(input.try_line::<&str>().unwrap().is_none());
}

#[test]
fn test_line_as_istr_keeps_index() {
    let mut input = IStr::new(b"ab\ncd\n");
    let first = input.line::<IStr>().unwrap();
    let second = input.line::<IStr>().unwrap();

    assert_eq!((first.index(), first.as_data()), (0, &b"ab"[..]));
    assert_eq!((second.index(), second.as_data()), (3, &b"cd"[..]));
    assert_eq!(second.as_bstr(), "cd");
}

#[test]
fn test_iter_words() {
    let mut input = IStr::new(b" 1  2\n3 ");

    let values = input
        .iter::<u32>()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(values, [1, 2, 3]);
}

#[test]
fn test_not_integer_span() {
    let mut input = IStr::new(b"12 ab\n");
    let error = input.line::<(u32, u32)>().unwrap_err();

    assert!(matches!(error.kind(), ErrorKind::NotInteger("ab")));
    assert_eq!(error.span(), 3..5);
}

#[test]
fn test_expected_line() {
    let error = IStr::new(b"").line::<u32>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::ExpectedLine));
}

#[test]
fn test_expected_tuple() {
    let error = IStr::new(b"1").next::<(u32, u32)>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::ExpectedTuple(2)));
}

#[test]
fn test_not_utf8() {
    let error = IStr::new(b"\xff\n").line::<&str>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NotUtf8));
}

#[test]
fn test_split_array() {
    let Split([a, b, c]) = IStr::new(b"1,2,3").next::<Split<',', [u32; 3]>>().unwrap();
    assert_eq!((a, b, c), (1, 2, 3));

    let error = IStr::new(b"1,2")
        .next::<Split<',', [u32; 3]>>()
        .unwrap_err();

    assert!(matches!(error.kind(), ErrorKind::BadArray(3, 2)));
}

#[test]
fn test_delimited_ranges() {
    let mut input = IStr::new(b"1-2, 30-40,\n");
    let mut ranges = Vec::new();

    for value in input.iter::<Delimited<',', Range<'-', u32>>>() {
        let Delimited(Range(range)) = value.unwrap();
        ranges.push(range);
    }

    assert_eq!(ranges, [1..=2, 30..=40]);
}

#[test]
fn test_delimited_skips_empty_pieces() {
    let mut input = IStr::new(b",1, ,,2,\n,");

    let values = input
        .iter::<Delimited<',', u32>>()
        .map(|value| value.map(|Delimited(n)| n))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(values, [1, 2]);
    assert!(input.is_empty());
}

#[test]
fn test_byte() {
    let (B(d), n) = IStr::new(b"R25").next::<(B, u32)>().unwrap();
    assert_eq!((d, n), (b'R', 25));
    assert!(IStr::new(b"").try_next::<B>().unwrap().is_none());
}
