use lib::input::IStr;

use super::{max_joltage, solve, BankError};

const EXAMPLE: &[u8] = b"\
987654321111111
811111111111119
234234234234278
818181911112111
";

#[test]
fn test_example() {
    assert_eq!(solve(IStr::new(EXAMPLE)).unwrap(), (357, 3121910778619));
}

#[test]
fn test_example_banks() {
    let banks: [&[u8]; 4] = [
        b"987654321111111",
        b"811111111111119",
        b"234234234234278",
        b"818181911112111",
    ];

    let two = banks.map(|bank| max_joltage(bank, 2).unwrap());
    assert_eq!(two, [98, 89, 78, 92]);

    let twelve = banks.map(|bank| max_joltage(bank, 12).unwrap());
    assert_eq!(
        twelve,
        [987654321111, 811111111119, 434234234278, 888911112111]
    );
}

#[test]
fn test_leftmost_maximum() {
    assert_eq!(max_joltage(b"9919", 2), Ok(99));
    assert_eq!(max_joltage(b"9919", 3), Ok(999));
}

#[test]
fn test_exact_length() {
    assert_eq!(max_joltage(b"1203", 4), Ok(1203));
    assert_eq!(max_joltage(b"1203", 0), Ok(0));
}

#[test]
fn test_errors() {
    assert_eq!(
        max_joltage(b"9", 2),
        Err(BankError::TooShort { len: 1, count: 2 })
    );

    assert_eq!(
        max_joltage(b"12x4", 2),
        Err(BankError::NotDigit {
            index: 2,
            battery: 'x'
        })
    );

    assert_eq!(
        max_joltage(&[b'9'; 20], 20),
        Err(BankError::Overflow { count: 20 })
    );

    assert!(solve(IStr::new(b"12345678901234\n99\n")).is_err());
}

#[test]
fn test_blank_lines_skipped() {
    assert_eq!(
        solve(IStr::new(b"\n987654321111111\r\n\n")).unwrap(),
        (98, 987654321111)
    );
}
