pub use self::args::{parse_invocation, usage, Args, Invocation};
pub use self::prompt::{Prompter, StdinPrompter};

mod args;
mod prompt;
