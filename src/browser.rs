use crate::errors::{Error, Result};

/// Something that can show a URL to the user.
pub trait Opener {
    fn open(&mut self, url: &str) -> Result<()>;
}

/// Opens URLs in the operating system's default browser.
#[derive(Debug, Default)]
pub struct Browser;

impl Opener for Browser {
    fn open(&mut self, url: &str) -> Result<()> {
        open::that(url).map_err(|source| Error::BrowserOpen {
            url: url.to_string(),
            source,
        })
    }
}

/// Remembers the last URL it was asked to open instead of launching anything.
#[derive(Debug, Default)]
pub struct Recorder {
    pub url: Option<String>,
}

impl Opener for Recorder {
    fn open(&mut self, url: &str) -> Result<()> {
        self.url = Some(url.to_string());
        Ok(())
    }
}
