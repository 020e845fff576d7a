use super::*;
use std::str::FromStr;

pub const MAIN_MENU: &str =
    "\n1. View Phonebook\n2. Add/Update Entry\n3. Bulk Import\n4. Delete Entry\n5. Exit";
pub const VIEW_MENU: &str = "\n1. Show all\n2. Filter by pattern\n3. Paginated view";
pub const CHOOSE_OPTION: &str = "Choose option: ";

/// Top level menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    View,
    AddOrUpdate,
    BulkImport,
    Delete,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = AppError;

    fn from_str(action: &str) -> Result<Self, Self::Err> {
        match action.trim() {
            "1" => Ok(MenuChoice::View),
            "2" => Ok(MenuChoice::AddOrUpdate),
            "3" => Ok(MenuChoice::BulkImport),
            "4" => Ok(MenuChoice::Delete),
            "5" => Ok(MenuChoice::Exit),
            _ => Err(AppError::ParseCommand(action.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewChoice {
    ShowAll,
    Filter,
    Paginated,
}

impl FromStr for ViewChoice {
    type Err = AppError;

    fn from_str(action: &str) -> Result<Self, Self::Err> {
        match action.trim() {
            "1" => Ok(ViewChoice::ShowAll),
            "2" => Ok(ViewChoice::Filter),
            "3" => Ok(ViewChoice::Paginated),
            _ => Err(AppError::ParseCommand(action.to_string())),
        }
    }
}

/// Navigation keys of the paginated view. Anything unknown redisplays the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    Next,
    Previous,
    Quit,
    Stay,
}

impl From<&str> for PageNav {
    fn from(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "n" => PageNav::Next,
            "p" => PageNav::Previous,
            "q" => PageNav::Quit,
            _ => PageNav::Stay,
        }
    }
}

impl PageNav {
    /// Offset of the page to show after this key. `None` leaves the view.
    pub fn apply(self, offset: usize, limit: usize) -> Option<usize> {
        match self {
            PageNav::Next => Some(offset + limit),
            PageNav::Previous if offset >= limit => Some(offset - limit),
            PageNav::Previous | PageNav::Stay => Some(offset),
            PageNav::Quit => None,
        }
    }
}
