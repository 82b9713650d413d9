//! Page records and their assembly from split photo sheets.
//!
//! Texture handles are opaque to the engine; the frontends instantiate these
//! types with whatever their renderer binds to material slots.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("need at least 2 sheets to bind a book, got {0}")]
    TooFewSheets(usize),
}

/// One source photo split vertically into halves.
#[derive(Clone, Debug)]
pub struct SheetHalves<T> {
    pub left: T,
    pub right: T,
}

/// One physical page: index 0 is the front cover, the last index the back.
#[derive(Clone, Debug)]
pub struct PageRecord<T> {
    pub index: usize,
    pub front: T,
    pub back: T,
}

/// Bind split sheets into pages. Page `i` shows sheet `i`'s right half on
/// its front and the next sheet's left half on its back; the last page wraps
/// around to the first sheet, closing the cover loop.
pub fn assemble_pages<T: Clone>(sheets: &[SheetHalves<T>]) -> Result<Vec<PageRecord<T>>, PageError> {
    if sheets.len() < 2 {
        return Err(PageError::TooFewSheets(sheets.len()));
    }
    Ok(sheets
        .iter()
        .enumerate()
        .map(|(i, sheet)| PageRecord {
            index: i,
            front: sheet.right.clone(),
            back: sheets[(i + 1) % sheets.len()].left.clone(),
        })
        .collect())
}

/// Texture delivery is atomic: nothing downstream runs until the whole set
/// is `Ready`, and a failed load never yields a partial book.
#[derive(Clone, Debug)]
pub enum PageLoad<T> {
    Pending { loaded: usize, total: usize },
    Ready(Vec<PageRecord<T>>),
    Failed(String),
}

impl<T> PageLoad<T> {
    pub fn progress(&self) -> f32 {
        match self {
            Self::Pending { loaded, total } => {
                if *total == 0 {
                    0.0
                } else {
                    *loaded as f32 / *total as f32
                }
            }
            Self::Ready(_) => 1.0,
            Self::Failed(_) => 0.0,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}
