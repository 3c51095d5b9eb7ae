//! Opening review pages in an external browser

use std::io;

/// Opens URLs outside the terminal
pub trait Browser {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// The system's default browser
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&self, url: &str) -> io::Result<()> {
        webbrowser::open(url)
    }
}
