mod entry;
mod exit;
mod reset;

pub use entry::EntryHandler;
pub use exit::ExitHandler;
pub use reset::ResetHandler;
