use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Could not determine the current directory: {}", .0)]
    CurrentDir(std::io::Error),

    #[error("`{}` is not a directory.", .path)]
    NotADirectory { path: String },

    #[error("Menu option out of range: {}! Expected a number between 1 and {}.", .index, .max)]
    OptionOutOfRange { index: usize, max: usize },
}
