use lib::input::IStr;

use super::{column_bit, solve, Op, Worksheet, WorksheetError};

const EXAMPLE: &[u8] = concat!(
    "123 328  51 64 \n",
    " 45 64  387 23 \n",
    "  6 98  215 314\n",
    "*   +   *   +  \n",
)
.as_bytes();

fn worksheet(data: &'static [u8]) -> Worksheet {
    Worksheet::parse(IStr::new(data)).unwrap()
}

#[test]
fn test_example() {
    assert_eq!(solve(IStr::new(EXAMPLE)).unwrap(), (4277556, 3263827));
}

#[test]
fn test_example_problems() {
    let worksheet = worksheet(EXAMPLE);
    assert_eq!(worksheet.problems(), [0..3, 4..7, 8..11, 12..15]);
}

#[test]
fn test_trailing_spaces_trimmed() {
    // Trailing spaces of every line are lost, which is fine since lines are
    // padded to the widest one.
    let data = b"123 328  51 64\n 45 64  387 23\n  6 98  215 314\n*   +   *   +\n";
    let worksheet = worksheet(data);
    assert_eq!(worksheet.by_rows(), Ok(4277556));
    assert_eq!(worksheet.by_columns(), Ok(3263827));
}

#[test]
fn test_single_problem() {
    let worksheet = worksheet(b"12\n 3\n* \n");
    assert_eq!(worksheet.by_rows(), Ok(36));
    assert_eq!(worksheet.by_columns(), Ok(23));
}

#[test]
fn test_apply() {
    assert_eq!(Op::Add.apply(&[1, 2, 3]), Some(6));
    assert_eq!(Op::Mul.apply(&[4, 5]), Some(20));
    assert_eq!(Op::Mul.apply(&[u64::MAX, 2]), None);
}

#[test]
fn test_missing_operator() {
    let worksheet = worksheet(b"1 2\n3 4\n+  \n");

    assert_eq!(
        worksheet.by_rows(),
        Err(WorksheetError::MissingOperator { start: 2, end: 3 })
    );
}

#[test]
fn test_unexpected_operator() {
    let worksheet = worksheet(b"1\n-\n");

    assert_eq!(
        worksheet.by_rows(),
        Err(WorksheetError::UnexpectedOperator { column: 0, op: '-' })
    );
}

#[test]
fn test_unexpected_cell() {
    let worksheet = worksheet(b"1x\n+ \n");

    assert_eq!(
        worksheet.by_columns(),
        Err(WorksheetError::UnexpectedCell {
            row: 0,
            column: 1,
            cell: 'x'
        })
    );
}

#[test]
fn test_problem_without_numbers_skipped() {
    let worksheet = worksheet(b"1  \n+ *\n");
    assert_eq!(worksheet.problems(), [0..1, 2..3]);
    assert_eq!(worksheet.by_rows(), Ok(1));
    assert_eq!(worksheet.by_columns(), Ok(1));
}

#[test]
fn test_empty() {
    assert_eq!(solve(IStr::new(b"\n\n")).unwrap(), (0, 0));
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_column_bit_too_wide() {
    assert_eq!(column_bit(7), Ok(7));

    let width = u32::MAX as usize + 1;
    assert_eq!(column_bit(width), Err(WorksheetError::TooWide { width }));
}
