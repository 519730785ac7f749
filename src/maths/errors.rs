use crate::log;
use derive_more::{Display, Error};

pub type Result<T> = std::result::Result<T, MathsError>;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum MathsError
{
    /// A named accessor was used on a vector too short to have that component
    #[display("Request for {accessor} with vec{size} is invalid")]
    OutOfRange
    {
        accessor: &'static str,
        size:     usize,
    },
    #[display("Element ({row}, {column}) is outside of a {rows}x{columns} matrix")]
    IndexOutOfRange
    {
        row:     usize,
        column:  usize,
        rows:    usize,
        columns: usize,
    },
}

impl log::ProjectError for MathsError
{
    fn title(&self) -> String
    {
        String::from(match *self {
            MathsError::OutOfRange { .. } => "Vector",
            MathsError::IndexOutOfRange { .. } => "Matrix",
        })
    }
}
