//! The two games offered in conversation.

pub mod rock_paper_scissors;
pub mod tictactoe;
