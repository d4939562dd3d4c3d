pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, message: String);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, message: String) {
        eprintln!("{message}");
    }
}

#[cfg(any(test, feature = "unit_test"))]
pub use transcript::*;

#[cfg(any(test, feature = "unit_test"))]
mod transcript {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::UserInterface;

    #[derive(Default)]
    struct Lines {
        messages: Vec<String>,
        errors: Vec<String>,
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// The text a [`FlagSet`](crate::FlagSet) has displayed, captured in memory.
    ///
    /// See [`FlagSet::in_memory`](crate::FlagSet::in_memory).
    #[derive(Default)]
    pub struct Transcript {
        lines: Rc<RefCell<Lines>>,
    }

    impl Transcript {
        pub(crate) fn interface(&self) -> TranscriptInterface {
            TranscriptInterface {
                lines: Rc::clone(&self.lines),
            }
        }

        /// Everything displayed on the standard output, joined by newlines.
        pub fn messages(&self) -> String {
            self.lines.borrow().messages.join("\n")
        }

        /// Everything displayed on the standard error, joined by newlines.
        pub fn errors(&self) -> String {
            self.lines.borrow().errors.join("\n")
        }
    }

    pub(crate) struct TranscriptInterface {
        lines: Rc<RefCell<Lines>>,
    }

    impl UserInterface for TranscriptInterface {
        fn print(&self, message: String) {
            self.lines.borrow_mut().messages.push(message);
        }

        fn print_error(&self, message: String) {
            self.lines.borrow_mut().errors.push(message);
        }
    }

}
