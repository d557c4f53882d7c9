//! Per-invocation application state

use crate::auth::{FileStorage, Session, SessionStorage};
use crate::config::Config;
use crate::error::Result;
use crate::routes::{Navigation, Route, navigate};
use crate::ticket::TicketCollection;

/// Configuration plus the session, handed to every command
#[derive(Debug, Clone)]
pub struct AppContext<S = FileStorage> {
    pub config: Config,
    pub session: Session<S>,
}

impl AppContext<FileStorage> {
    /// Load configuration and session from the Resolv home directory
    pub fn load() -> Result<Self> {
        let config = Config::load()?;
        let session = Session::load(FileStorage::at_default_path())?;
        Ok(Self { config, session })
    }
}

impl<S: SessionStorage> AppContext<S> {
    pub fn new(config: Config, session: Session<S>) -> Self {
        Self { config, session }
    }

    /// Run a route through the guard using this context's session
    pub fn navigate(&self, route: Route) -> Navigation {
        navigate(route, self.session.is_authenticated())
    }

    /// The collection the ticket screen starts with
    pub fn initial_tickets(&self) -> TicketCollection {
        if self.config.load_seed {
            TicketCollection::seeded(&self.config.id_prefix)
        } else {
            TicketCollection::new(&self.config.id_prefix)
        }
    }
}
