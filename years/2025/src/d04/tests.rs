use lib::input::IStr;

use super::{cell_bit, solve, Floor, FloorError, Pos, Round, THRESHOLD};

const EXAMPLE: &str = "\
..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.
";

fn example() -> Floor {
    Floor::parse(IStr::new(EXAMPLE.as_bytes())).unwrap()
}

#[test]
fn test_example_accessible_once() {
    let floor = example();
    assert_eq!((floor.rows_len(), floor.columns_len()), (10, 10));
    assert_eq!(floor.count_accessible_once(), 13);
}

#[test]
fn test_example_stabilize() {
    let mut floor = example();
    assert_eq!(floor.stabilize(), 43);
    assert!(floor.find_accessible().is_empty());
}

#[test]
fn test_example_solve() {
    assert_eq!(solve(IStr::new(EXAMPLE.as_bytes())).unwrap(), (13, 43));
}

#[test]
fn test_count_occupied_neighbors() {
    let floor = Floor::from_rows(["@@@", "@.@", "@@@"]).unwrap();
    assert_eq!(floor.count_occupied_neighbors(1, 1), 8);
    assert_eq!(floor.count_occupied_neighbors(0, 0), 2);
    assert_eq!(floor.count_occupied_neighbors(0, 1), 4);
    assert_eq!(floor.count_occupied_neighbors(2, 2), 2);
}

#[test]
fn test_find_accessible_row_major() {
    let floor = Floor::from_rows(["@@@", "@@@", "@@@"]).unwrap();

    assert_eq!(
        floor.find_accessible(),
        [Pos::new(0, 0), Pos::new(0, 2), Pos::new(2, 0), Pos::new(2, 2)]
    );
}

/// Removing a corner drops the neighbor count of the edges next to it below
/// the threshold, but they must survive until the next round.
#[test]
fn test_removal_is_simultaneous() {
    let mut floor = Floor::from_rows(["@@@", "@@@", "@@@"]).unwrap();
    let mut rounds = Vec::new();

    let total = floor.stabilize_with(|round: &Round<'_>| {
        rounds.push((round.number, round.removed.to_vec(), round.total));
    });

    assert_eq!(total, 9);

    assert_eq!(
        rounds,
        [
            (
                1,
                vec![Pos::new(0, 0), Pos::new(0, 2), Pos::new(2, 0), Pos::new(2, 2)],
                4
            ),
            (
                2,
                vec![Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 2), Pos::new(2, 1)],
                8
            ),
            (3, vec![Pos::new(1, 1)], 9),
        ]
    );
}

#[test]
fn test_single_roll() {
    let mut floor = Floor::from_rows(["@"]).unwrap();
    assert_eq!(floor.count_occupied_neighbors(0, 0), 0);
    assert_eq!(floor.count_accessible_once(), 1);
    assert_eq!(floor.stabilize(), 1);
    assert!(!floor.is_occupied(Pos::new(0, 0)));
}

#[test]
fn test_empty_floor() {
    let mut floor = Floor::parse(IStr::new(b"\n\n")).unwrap();
    assert_eq!(floor.rows_len(), 0);
    assert_eq!(floor.count_accessible_once(), 0);
    assert_eq!(floor.stabilize(), 0);
}

#[test]
fn test_rounds_are_monotonic_and_bounded() {
    let mut floor = example();
    let cells = floor.rows_len() * floor.columns_len();
    let mut remaining = vec![floor.occupied()];

    floor.stabilize_with(|round: &Round<'_>| {
        // The observer sees the floor before the round is applied.
        assert_eq!(round.floor.occupied(), *remaining.last().unwrap());
        assert!(!round.removed.is_empty());
        remaining.push(round.floor.occupied() - round.removed.len());
    });

    assert!(remaining.len() - 1 <= cells);
    assert!(remaining.windows(2).all(|w| w[1] < w[0]));
    assert_eq!(*remaining.last().unwrap(), floor.occupied());
}

#[test]
fn test_stable_floor_has_dense_rolls() {
    let mut floor = example();
    floor.stabilize();

    for row in 0..floor.rows_len() {
        for col in 0..floor.columns_len() {
            if floor.is_occupied(Pos::new(row, col)) {
                assert!(floor.count_occupied_neighbors(row, col) >= THRESHOLD);
            }
        }
    }
}

#[test]
fn test_frontier_matches_rescan() {
    let floors = [
        example(),
        Floor::from_rows(["@@@", "@@@", "@@@"]).unwrap(),
        Floor::from_rows(["@@@@@", "@@@@@", "@@@@@", "@@@@@"]).unwrap(),
        Floor::from_rows([".@.", "@@@", ".@."]).unwrap(),
        Floor::from_rows(["@"]).unwrap(),
    ];

    for floor in floors {
        let mut a = floor.clone();
        let mut b = floor;
        assert_eq!(a.stabilize(), b.stabilize_frontier());
        assert_eq!(a, b);
    }
}

#[test]
fn test_round_display() {
    let floor = Floor::from_rows(["@@", "@."]).unwrap();
    let removed = floor.find_accessible();

    let round = Round {
        number: 1,
        floor: &floor,
        removed: &removed,
        total: removed.len(),
    };

    assert_eq!(round.to_string(), "xx\nx.\n");
    assert_eq!(floor.to_string(), "@@\n@.\n");
}

#[test]
fn test_parse_crlf_and_blank_lines() {
    let floor = Floor::parse(IStr::new(b"\r\n@.\r\n\r\n.@\r\n")).unwrap();
    assert_eq!(floor, Floor::from_rows(["@.", ".@"]).unwrap());
}

#[test]
fn test_reject_jagged() {
    let error = Floor::from_rows(["@@.", "@.", "@@."]).unwrap_err();

    assert_eq!(
        error,
        FloorError::Jagged {
            row: 1,
            expected: 3,
            actual: 2
        }
    );

    assert!(solve(IStr::new(b"@@\n@\n")).is_err());
}

#[test]
fn test_reject_unexpected_cell() {
    let error = Floor::from_rows(["@.", ".#"]).unwrap_err();

    assert_eq!(
        error,
        FloorError::UnexpectedCell {
            row: 1,
            col: 1,
            cell: '#'
        }
    );
}

#[test]
fn test_cell_bit() {
    assert_eq!(cell_bit(99), Ok(99));
    assert_eq!(cell_bit(u32::MAX as usize), Ok(u32::MAX));
}

#[test]
#[cfg(target_pointer_width = "64")]
fn test_cell_bit_too_large() {
    let cells = u32::MAX as usize + 1;
    assert_eq!(cell_bit(cells), Err(FloorError::TooLarge { cells }));
}
