use std::fmt;

/// User-facing outcome of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Failed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Sent => "Message sent successfully! I will get back to you soon.",
            Notice::Failed => {
                "Failed to send message. Please try again or contact me directly via email."
            }
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Prints notices to the terminal.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        match notice {
            Notice::Sent => println!("{}", notice),
            Notice::Failed => eprintln!("{}", notice),
        }
    }
}
