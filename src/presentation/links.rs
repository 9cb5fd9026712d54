//! Handing websites to the operating system.

use crate::catalog::Institution;
use crate::error::LinkOpenError;
use std::io;
use tracing::{info, warn};

/// Something that can open an address outside the application.
pub trait LinkOpener {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Opens addresses with the platform's default handler.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemLinkOpener;

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) -> io::Result<()> {
        open::that(url)
    }
}

/// Open an institution's website, passing the stored text through verbatim.
pub fn open_website(
    opener: &dyn LinkOpener,
    institution: &Institution,
) -> Result<(), LinkOpenError> {
    let Some(url) = institution.website() else {
        return Err(LinkOpenError::NoWebsite {
            name: institution.name.clone(),
        });
    };
    match opener.open(url) {
        Ok(()) => {
            info!(institution = %institution.name, url, "opened website");
            Ok(())
        }
        Err(source) => {
            warn!(url, error = %source, "failed to open website");
            Err(LinkOpenError::Launch {
                url: url.to_string(),
                source,
            })
        }
    }
}
