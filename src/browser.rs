use std::io;

/// Something that can show a URL to the user
pub trait Browser {
    fn open(&mut self, url: &str) -> io::Result<()>;
}

/// The user's default web browser
#[derive(Debug, Default)]
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&mut self, url: &str) -> io::Result<()> {
        tracing::debug!("Opening {} in browser", url);
        webbrowser::open(url)
    }
}
