mod read_mode;
mod write_mode;

pub use read_mode::read_mode;
pub use write_mode::{editor_mode, write_mode};

pub enum CliModeResult {
    Finish,
    NothingToDo,
}
