pub mod d01;
pub mod d02;
pub mod d03;
pub mod d04;
pub mod d06;
