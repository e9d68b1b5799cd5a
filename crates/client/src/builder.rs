//! Assembles a [`Client`] from a runtime, a frontend and the match to open.

use anyhow::{Context, Result};
use match_core::{MatchInfo, Sport};

use crate::{Client, Frontend, MatchSetup};

/// Collects the client's parts; `build()` rejects a missing runtime or
/// frontend and an unknown sport before anything starts running.
#[derive(Default)]
pub struct ClientBuilder {
    runtime: Option<runtime::Runtime>,
    frontend: Option<Box<dyn Frontend>>,
    opening: Option<(String, String, MatchInfo)>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runtime the frontend drives (required).
    pub fn runtime(mut self, runtime: runtime::Runtime) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Operator input surface (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Match loaded before the frontend starts. Without it the frontend
    /// starts against an empty runtime.
    pub fn open_match(
        mut self,
        match_key: impl Into<String>,
        sport: impl Into<String>,
        info: MatchInfo,
    ) -> Self {
        self.opening = Some((match_key.into(), sport.into(), info));
        self
    }

    /// # Errors
    ///
    /// Fails when the runtime or frontend is missing, or when the opening
    /// match names a sport that does not exist.
    pub fn build(self) -> Result<Client> {
        let runtime = self
            .runtime
            .context("no runtime configured, call .runtime() first")?;
        let frontend = self
            .frontend
            .context("no frontend configured, call .frontend() first")?;

        let opening = self
            .opening
            .map(|(match_key, sport, info)| {
                let sport = Sport::parse(&sport)
                    .with_context(|| format!("match '{match_key}' has an invalid sport"))?;
                Ok::<_, anyhow::Error>(MatchSetup {
                    match_key,
                    sport,
                    info,
                })
            })
            .transpose()?;

        Ok(Client {
            runtime,
            frontend,
            opening,
        })
    }
}
